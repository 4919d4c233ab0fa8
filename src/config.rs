// src/config.rs
use crate::error::AppError;
use clap::Parser;
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// JSON document describing the blocks to assemble ("-" reads stdin)
    pub document: String,

    /// Output file for the rendered request bodies (optional)
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Print the request bodies to stdout, also when an output file is given
    #[arg(short = 'p', long, default_value_t = false)]
    pub pipe: bool,

    /// Emit single-line JSON instead of pretty-printed JSON
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Emit the blocks of each parent on the rayon thread pool
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Where the document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Stdin,
    File(PathBuf),
}

/// Resolved configuration, validated and ready to drive an assembly run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleConfig {
    pub source: DocumentSource,
    pub output_file: Option<PathBuf>,
    pub pipe: bool,
    pub compact: bool,
    pub parallel: bool,
    pub verbose: bool,
}

impl AssembleConfig {
    /// Resolves the configuration from CLI input.
    ///
    /// Without an output file the bodies always go to stdout.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let source = match cli.document.as_str() {
            "-" => DocumentSource::Stdin,
            "" => {
                return Err(AppError::MissingConfiguration(
                    "document path is empty".to_string(),
                ))
            }
            path => {
                let path = PathBuf::from(path);
                if !path.is_file() {
                    return Err(AppError::MissingConfiguration(format!(
                        "document not found: {}",
                        path.display()
                    )));
                }
                DocumentSource::File(path)
            }
        };

        let output_file = cli.output_file.map(PathBuf::from);
        let pipe = cli.pipe || output_file.is_none();

        Ok(Self {
            source,
            output_file,
            pipe,
            compact: cli.compact,
            parallel: cli.parallel,
            verbose: cli.verbose,
        })
    }
}

impl Default for AssembleConfig {
    fn default() -> Self {
        Self {
            source: DocumentSource::Stdin,
            output_file: None,
            pipe: true,
            compact: false,
            parallel: false,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CommandLineInput {
        CommandLineInput::parse_from(std::iter::once("notion-blocks").chain(args.iter().copied()))
    }

    #[test]
    fn stdin_without_output_pipes() {
        let config = AssembleConfig::resolve(parse(&["-"])).unwrap();
        assert_eq!(config.source, DocumentSource::Stdin);
        assert!(config.pipe);
        assert!(config.output_file.is_none());
    }

    #[test]
    fn output_file_turns_off_implicit_pipe() {
        let config = AssembleConfig::resolve(parse(&["-", "-o", "out.json", "--compact"])).unwrap();
        assert_eq!(config.output_file, Some(PathBuf::from("out.json")));
        assert!(!config.pipe);
        assert!(config.compact);
    }

    #[test]
    fn missing_document_is_rejected() {
        let err = AssembleConfig::resolve(parse(&["/definitely/not/here.json"])).unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(_)));
    }
}
