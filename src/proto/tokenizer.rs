/// Longest command accepted, terminator included.
pub const MAX_COMMAND_LEN: usize = 64;

/// Clamp raw input to what fits in the command buffer. Anything past
/// `MAX_COMMAND_LEN - 1` bytes is dropped silently; a valid command is never
/// that long.
pub fn truncate_command(raw: &[u8]) -> &[u8] {
    &raw[..raw.len().min(MAX_COMMAND_LEN - 1)]
}

/// Lazy cursor over the whitespace-separated tokens of a command line.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a [u8],
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a [u8]) -> Self {
        Self { rest: line }
    }
}

// C `isspace`: includes vertical tab, which `u8::is_ascii_whitespace` does not.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.rest.iter().position(|&b| !is_space(b))?;
        let rest = &self.rest[start..];
        let end = rest.iter().position(|&b| is_space(b)).unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        self.rest = tail;
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(line: &str) -> Vec<&str> {
        Tokens::new(line.as_bytes())
            .map(|t| std::str::from_utf8(t).unwrap())
            .collect()
    }

    #[test]
    fn splits_and_collapses_whitespace() {
        assert_eq!(collect("eth0 rx bytes =100\n"), ["eth0", "rx", "bytes", "=100"]);
        assert_eq!(collect("  eth0\t\trx \x0b bytes\r\n+1  "), ["eth0", "rx", "bytes", "+1"]);
    }

    #[test]
    fn final_token_without_terminator() {
        assert_eq!(collect("eth0 tx"), ["eth0", "tx"]);
    }

    #[test]
    fn empty_and_blank_lines() {
        assert!(collect("").is_empty());
        assert!(collect(" \n\t ").is_empty());
    }

    #[test]
    fn truncation() {
        let long = [b'a'; 100];
        assert_eq!(truncate_command(&long).len(), MAX_COMMAND_LEN - 1);
        assert_eq!(truncate_command(b"eth0"), b"eth0");
    }
}
