/// Размер тела ответа для лога запросов: `512 B`, `1.5 KB`, `2.0 MB`
pub fn format_bytes(n: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let size = n as f64;
    if size < KB {
        format!("{} B", n)
    } else if size < MB {
        format!("{:.1} KB", size / KB)
    } else {
        format!("{:.1} MB", size / MB)
    }
}
