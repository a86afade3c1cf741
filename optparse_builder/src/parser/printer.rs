use crate::api::OptionSpec;
use crate::constant::*;
use crate::matcher::Registry;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_DESCRIPTION_WIDTH: usize = 17;

/// Renders the help message of one command.
pub(crate) struct Printer<'a> {
    command: &'a str,
    description: &'a str,
    registry: &'a Registry,
    terminal_width: Option<usize>,
}

impl<'a> Printer<'a> {
    pub(crate) fn new(
        command: &'a str,
        description: &'a str,
        registry: &'a Registry,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            command,
            description,
            registry,
            terminal_width,
        }
    }

    pub(crate) fn render(&self) -> String {
        self.lines().join("\n")
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Command: {} - {}", self.command, self.description),
            self.usage(),
        ];

        let positionals: Vec<&OptionSpec> = self
            .registry
            .specs()
            .iter()
            .filter(|s| s.is_positional())
            .collect();
        let (required, optional): (Vec<&OptionSpec>, Vec<&OptionSpec>) = self
            .registry
            .display_order()
            .into_iter()
            .partition(|s| s.is_required());
        let left_width = positionals
            .iter()
            .map(|s| s.long().len())
            .chain(std::iter::once(flags_width(self.registry.longest_name())))
            .max()
            .unwrap_or(0);

        for (title, specs) in [
            ("Parameters:", positionals),
            ("Required options:", required),
            ("Optional options:", optional),
        ] {
            if specs.is_empty() {
                continue;
            }

            lines.push(String::default());
            lines.push(title.to_string());

            for spec in specs {
                lines.extend(self.render_spec(spec, left_width));
            }
        }

        lines
    }

    fn usage(&self) -> String {
        let mut usage = format!("Usage: {} [options]", self.command);

        for spec in self.registry.required_positionals() {
            usage.push_str(&format!(" \"{}\"", spec.long()));
        }

        for spec in self.registry.optional_positionals() {
            usage.push_str(&format!(" [{}]", spec.long()));
        }

        usage
    }

    fn render_spec(&self, spec: &OptionSpec, left_width: usize) -> Vec<String> {
        let left = match spec.short() {
            Some(short) if !spec.is_positional() => format!("-{short}, --{}", spec.long()),
            _ => spec.long().to_string(),
        };
        let description = if spec.is_positional() || !spec.takes_value() {
            spec.description().to_string()
        } else if spec.description().is_empty() {
            VALUE_REQUIRED_NOTE.to_string()
        } else {
            format!("{} {VALUE_REQUIRED_NOTE}", spec.description())
        };
        let column = MAIN_INDENT + left_width + NAME_MARGIN;
        let parts = match self.terminal_width {
            Some(width) if width >= column + MINIMUM_DESCRIPTION_WIDTH => {
                chunk(&description, width - column)
            }
            _ => {
                #[cfg(feature = "tracing_debug")]
                {
                    if self.terminal_width.is_some() {
                        debug!("Description column {column} does not fit the terminal.  Not wrapping.");
                    }
                }
                vec![description]
            }
        };
        let mut out = Vec::default();

        for (i, part) in parts.iter().enumerate() {
            let left = if i == 0 { left.as_str() } else { "" };
            let line = format!(
                "{:indent$}{:width$}{part}",
                "",
                left,
                indent = MAIN_INDENT,
                width = left_width + NAME_MARGIN
            );
            out.push(line.trim_end().to_string());
        }

        if out.is_empty() {
            out.push(format!("{:indent$}{left}", "", indent = MAIN_INDENT));
        }

        out
    }
}

// "-s, --" followed by the long name.
fn flags_width(longest_name: usize) -> usize {
    longest_name + 6
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + word.len() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
