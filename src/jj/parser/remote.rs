//! Parser for `jj git remote list` output

/// Remote names, one per `name url` line
pub fn parse_remote_list(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}
