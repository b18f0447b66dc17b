//! leafwrap I/O - Read, transform and write JSON documents
//!
//! This crate is the file boundary around `leafwrap-core`:
//!
//! - Reading and parsing one JSON document from a path or reader
//! - Running the substitution transformer
//! - Serializing with configurable indentation
//! - Writing to a path or writer
//!
//! The whole document is serialized in memory before the destination is
//! touched, so a failed read, parse or transform never creates the output.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod options;

// Re-export commonly used types
pub use error::{Result, SubstituteError};
pub use leafwrap_core::{
    DepthBudget, TransformError, TransformLimits, TransformStats, Transformer, ValueKind,
    WrapperKeys, DEFAULT_CONTENT_KEY, DEFAULT_TYPE_KEY,
};
pub use options::{OutputLayout, SubstituteOptions, DEFAULT_INDENT, MAX_INDENT};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const READER_LABEL: &str = "<reader>";
const WRITER_LABEL: &str = "<writer>";

/// Where the input document comes from
pub enum InputSource {
    /// Read the whole file at this path
    Path(PathBuf),
    /// Read until EOF from an arbitrary reader
    Reader(Box<dyn Read>),
}

impl InputSource {
    fn label(&self) -> PathBuf {
        match self {
            InputSource::Path(path) => path.clone(),
            InputSource::Reader(_) => PathBuf::from(READER_LABEL),
        }
    }
}

/// Where the transformed document goes
pub enum OutputSink {
    /// Create or overwrite the file at this path
    Path(PathBuf),
    /// Write to an arbitrary writer
    Writer(Box<dyn Write>),
}

/// A single substitution job
pub struct SubstituteRequest {
    /// Input document
    pub input: InputSource,
    /// Output destination
    pub output: OutputSink,
    /// Transformation and layout options
    pub options: SubstituteOptions,
}

/// Outcome of a successful substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstituteSummary {
    /// Depth budget used, as given on the command line
    pub depth: String,
    /// Bytes read from the input
    pub input_bytes: usize,
    /// Bytes written to the output
    pub output_bytes: usize,
    /// Traversal counters
    #[serde(flatten)]
    pub stats: TransformStats,
}

/// Run a substitution request end to end
pub fn execute_substitute(request: SubstituteRequest) -> Result<SubstituteSummary> {
    let SubstituteRequest {
        input,
        output,
        options,
    } = request;

    options.validate()?;
    let transformer = options.transformer()?;

    let (document, input_bytes) = read_document(input)?;
    let (transformed, stats) = transformer.transform_with_stats(&document, options.depth)?;
    let rendered = render(&transformed, options.layout)?;
    write_document(output, &rendered)?;

    Ok(SubstituteSummary {
        depth: options.depth.to_string(),
        input_bytes,
        output_bytes: rendered.len(),
        stats,
    })
}

/// Substitute a document read from `input`, writing the result to `output`
pub fn substitute<R: Read + 'static, W: Write + 'static>(
    input: R,
    output: W,
    options: SubstituteOptions,
) -> Result<SubstituteSummary> {
    execute_substitute(SubstituteRequest {
        input: InputSource::Reader(Box::new(input)),
        output: OutputSink::Writer(Box::new(output)),
        options,
    })
}

/// Convenience wrapper for path-to-path substitution
pub fn substitute_file(
    input: &Path,
    output: &Path,
    options: SubstituteOptions,
) -> Result<SubstituteSummary> {
    execute_substitute(SubstituteRequest {
        input: InputSource::Path(input.to_path_buf()),
        output: OutputSink::Path(output.to_path_buf()),
        options,
    })
}

/// Read and parse one JSON document, returning it with its size in bytes
pub fn read_document(input: InputSource) -> Result<(Value, usize)> {
    let label = input.label();
    let bytes = match input {
        InputSource::Path(path) => fs::read(&path).map_err(|source| SubstituteError::InputRead {
            path: path.clone(),
            source,
        })?,
        InputSource::Reader(mut reader) => {
            let mut buf = Vec::new();
            reader
                .read_to_end(&mut buf)
                .map_err(|source| SubstituteError::InputRead {
                    path: label.clone(),
                    source,
                })?;
            buf
        }
    };
    debug!(input = %label.display(), bytes = bytes.len(), "read input");

    let value = serde_json::from_slice(&bytes).map_err(|source| SubstituteError::Parse {
        path: label.clone(),
        source,
    })?;
    debug!(input = %label.display(), "parsed input");

    Ok((value, bytes.len()))
}

/// Serialize `value` in the requested layout
///
/// No trailing newline is appended.
pub fn render(value: &Value, layout: OutputLayout) -> Result<Vec<u8>> {
    match layout {
        OutputLayout::Compact => serde_json::to_vec(value).map_err(SubstituteError::Serialize),
        OutputLayout::Indented(width) => {
            let indent = vec![b' '; width];
            let mut buf = Vec::new();
            let mut serializer =
                Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
            value
                .serialize(&mut serializer)
                .map_err(SubstituteError::Serialize)?;
            Ok(buf)
        }
    }
}

/// Write rendered bytes to the sink
pub fn write_document(output: OutputSink, bytes: &[u8]) -> Result<()> {
    match output {
        OutputSink::Path(path) => {
            fs::write(&path, bytes).map_err(|source| SubstituteError::OutputWrite {
                path: path.clone(),
                source,
            })?;
            debug!(output = %path.display(), bytes = bytes.len(), "wrote output");
        }
        OutputSink::Writer(mut writer) => {
            writer
                .write_all(bytes)
                .and_then(|_| writer.flush())
                .map_err(|source| SubstituteError::OutputWrite {
                    path: PathBuf::from(WRITER_LABEL),
                    source,
                })?;
            debug!(output = WRITER_LABEL, bytes = bytes.len(), "wrote output");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn render_uses_four_space_indent_by_default() {
        let value = json!({"a": {"content": 1, "type": "integer"}});
        let text = String::from_utf8(render(&value, OutputLayout::default()).unwrap()).unwrap();
        assert_eq!(
            text,
            "{\n    \"a\": {\n        \"content\": 1,\n        \"type\": \"integer\"\n    }\n}"
        );
    }

    #[test]
    fn render_compact() {
        let value = json!({"a": [1, 2], "b": {}});
        let text = String::from_utf8(render(&value, OutputLayout::Compact).unwrap()).unwrap();
        assert_eq!(text, r#"{"a":[1,2],"b":{}}"#);
    }

    #[test]
    fn render_custom_indent() {
        let value = json!({"a": 1});
        let text = String::from_utf8(render(&value, OutputLayout::Indented(2)).unwrap()).unwrap();
        assert_eq!(text, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn substitute_reader_to_writer() {
        let sink = SharedBuf::default();
        let input = std::io::Cursor::new(br#"{"a": 1, "b": {"c": 2}}"#.to_vec());
        let summary = substitute(
            input,
            sink.clone(),
            SubstituteOptions::with_depth(DepthBudget::Bounded(1)),
        )
        .unwrap();

        let written: Value = serde_json::from_slice(&sink.0.borrow()).unwrap();
        assert_eq!(
            written,
            json!({"a": {"content": 1, "type": "integer"}, "b": {"c": 2}})
        );
        assert_eq!(summary.depth, "1");
        assert_eq!(summary.stats.leaves_wrapped, 1);
        assert_eq!(summary.stats.boundary_objects, 1);
        assert_eq!(summary.output_bytes, sink.0.borrow().len());
    }

    #[test]
    fn parse_error_names_reader() {
        let input = std::io::Cursor::new(b"{not json".to_vec());
        let err = substitute(input, std::io::sink(), SubstituteOptions::default()).unwrap_err();
        match err {
            SubstituteError::Parse { path, .. } => assert_eq!(path, PathBuf::from("<reader>")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn summary_serializes_flat() {
        let summary = SubstituteSummary {
            depth: "unbounded".to_string(),
            input_bytes: 10,
            output_bytes: 20,
            stats: TransformStats {
                leaves_wrapped: 3,
                objects_visited: 2,
                boundary_objects: 0,
                max_level_reached: 1,
            },
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["depth"], "unbounded");
        assert_eq!(value["leaves_wrapped"], 3);
        assert_eq!(value["max_level_reached"], 1);
    }
}
