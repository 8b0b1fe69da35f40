pub fn format_kilobytes(size: u64, precision: usize) -> String {
    format!("{:.*} KB", precision, size as f64 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_requested_precision() {
        assert_eq!(format_kilobytes(0, 2), "0.00 KB");
        assert_eq!(format_kilobytes(1536, 2), "1.50 KB");
        assert_eq!(format_kilobytes(1536, 1), "1.5 KB");
        assert_eq!(format_kilobytes(10 * 1024 * 1024, 1), "10240.0 KB");
    }
}
