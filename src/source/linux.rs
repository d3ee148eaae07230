// Linux-specific helpers: file descriptor usage from /proc.

/// Number of entries in /proc/self/fd (Linux).
pub(super) fn open_fd_count() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        let entries = std::fs::read_dir("/proc/self/fd").ok()?;
        Some(entries.count() as u64)
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// Soft "Max open files" limit from /proc/self/limits (Linux).
pub(super) fn max_fd_count() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/self/limits").ok()?;
        parse_max_open_files(&content)
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// `Max open files            1024                 524288               files`
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_max_open_files(limits: &str) -> Option<u64> {
    let line = limits.lines().find(|l| l.starts_with("Max open files"))?;
    let soft = line.trim_start_matches("Max open files").split_whitespace().next()?;
    soft.parse().ok()
}
