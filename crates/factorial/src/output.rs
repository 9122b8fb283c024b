/// A captured trace split into its log lines and its final numeric result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraceOutput {
    pub logs: Vec<String>,
    pub result: Option<u128>,
}

impl TraceOutput {
    /// The last line is taken as the result only when it is an unsigned
    /// integer (ASCII digits, no sign). Anything else stays in `logs`.
    pub fn parse(output: &str) -> Self {
        let mut logs: Vec<String> = output.trim().lines().map(str::to_owned).collect();
        let result = logs
            .last()
            .filter(|line| !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|line| line.parse().ok());
        if result.is_some() {
            logs.pop();
        }
        Self { logs, result }
    }

    /// `(i, partial)` for every `Step {i}: -> {partial}` line, in order.
    pub fn steps(&self) -> impl Iterator<Item = (u32, u128)> + '_ {
        self.logs.iter().filter_map(|line| {
            let (i, partial) = line.trim().strip_prefix("Step ")?.split_once(": -> ")?;
            let i: u32 = i.parse().ok()?;
            let partial: u128 = partial.parse().ok()?;
            Some((i, partial))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run;

    #[test]
    fn empty_output() {
        assert_eq!(TraceOutput::parse(""), TraceOutput::default());
    }

    #[test]
    fn splits_result_from_logs() {
        let mut out = Vec::new();
        run(Some("4"), &mut out).unwrap();
        let parsed = TraceOutput::parse(std::str::from_utf8(&out).unwrap());
        assert_eq!(parsed.result, Some(24));
        assert_eq!(parsed.logs.first().unwrap(), "Starting factorial computation for n=4");
        assert_eq!(parsed.logs.last().unwrap(), "Factorial of 4 is 24");
        assert_eq!(
            parsed.steps().collect::<Vec<_>>(),
            vec![(1, 1), (2, 2), (3, 6), (4, 24)]
        );
    }

    #[test]
    fn non_numeric_last_line_is_a_log() {
        let parsed = TraceOutput::parse("Starting factorial computation for n=-1\n");
        assert_eq!(parsed.result, None);
        assert_eq!(parsed.logs.len(), 1);
        assert_eq!(parsed.steps().count(), 0);
    }

    #[test]
    fn signed_last_line_is_a_log() {
        let parsed = TraceOutput::parse("Factorial of 3 is 6\n-6\n");
        assert_eq!(parsed.result, None);
        assert_eq!(parsed.logs.last().unwrap(), "-6");
    }

    #[test]
    fn windows_line_endings() {
        let parsed = TraceOutput::parse(" Step 1: -> 1\r\nFactorial of 1 is 1\r\n1\r\n");
        assert_eq!(parsed.result, Some(1));
        assert_eq!(parsed.steps().collect::<Vec<_>>(), vec![(1, 1)]);
    }
}
