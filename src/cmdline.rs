use crate::error::{EnergyError, Result};

/// The command to launch, as received and as a single flattened line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    args: Vec<String>,
    line: String,
}

impl CommandLine {
    /// Builds the command line from the program followed by its arguments.
    ///
    /// Arguments containing a space are wrapped in double quotes when
    /// flattened. Quote characters already inside an argument are copied as-is,
    /// so an argument holding both spaces and quotes does not survive a re-split.
    pub fn assemble(args: &[String]) -> Result<Self> {
        if args.is_empty() {
            return Err(EnergyError::Usage);
        }

        let line = args
            .iter()
            .map(|arg| {
                if arg.contains(' ') {
                    format!("\"{arg}\"")
                } else {
                    arg.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Self {
            args: args.to_vec(),
            line,
        })
    }

    pub fn program(&self) -> &str {
        &self.args[0]
    }

    pub fn arguments(&self) -> &[String] {
        &self.args[1..]
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn as_str(&self) -> &str {
        &self.line
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.line)
    }
}
