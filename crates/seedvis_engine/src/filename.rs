/// Entry name of case `index` inside a batch archive: `in_0000.txt`, `in_0001.txt`, ...
///
/// Four digits cover the largest batch; the width is fixed so archive
/// listings sort in case order.
pub fn archive_entry_name(index: usize) -> String {
    format!("in_{index:04}.txt")
}

/// Default download name for a batch starting at `seed`.
pub fn archive_filename(seed: u64) -> String {
    format!("input_{seed}.zip")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_names_are_zero_padded() {
        assert_eq!(archive_entry_name(0), "in_0000.txt");
        assert_eq!(archive_entry_name(42), "in_0042.txt");
        assert_eq!(archive_entry_name(9_999), "in_9999.txt");
    }

    #[test]
    fn archive_name_embeds_seed() {
        assert_eq!(archive_filename(0), "input_0.zip");
        assert_eq!(archive_filename(u64::MAX), "input_18446744073709551615.zip");
    }
}
