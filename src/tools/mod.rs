//! Tool registry: maps tool names to note operations for a host.
//!
//! The registry is built explicitly from a [`NoteOps`]; nothing registers
//! itself. Hosts list the descriptors and call tools by name with JSON
//! arguments, receiving the operation's text back.

use crate::notes::NoteOps;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::debug;

// ===========================================
// Errors
// ===========================================

/// Errors raised before an operation runs.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: &'static str, message: String },
}

// ===========================================
// Descriptors
// ===========================================

/// What a host sees when it lists tools.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

type Handler = fn(&NoteOps, Value) -> Result<String, ToolError>;

struct Tool {
    descriptor: ToolDescriptor,
    handler: Handler,
}

// ===========================================
// Arguments
// ===========================================

#[derive(Debug, serde::Deserialize)]
struct ListArgs {
    number_of_notes: u64,
}

#[derive(Debug, serde::Deserialize)]
struct TagArgs {
    tag: String,
}

#[derive(Debug, serde::Deserialize)]
struct TitleArgs {
    note_title: String,
}

fn decode<T: DeserializeOwned>(tool: &'static str, arguments: Value) -> Result<T, ToolError> {
    let arguments = if arguments.is_null() {
        json!({})
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments {
        tool,
        message: e.to_string(),
    })
}

fn string_schema(name: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "properties": { name: { "type": "string", "description": description } },
        "required": [name],
    })
}

// ===========================================
// Registry
// ===========================================

/// The tools a host may call, bound to one set of note operations.
pub struct ToolRegistry {
    ops: NoteOps,
    tools: Vec<Tool>,
}

impl ToolRegistry {
    /// Registers the four note tools.
    pub fn new(ops: NoteOps) -> Self {
        let tools = vec![
            Tool {
                descriptor: ToolDescriptor {
                    name: "get_list_of_notes",
                    description: "Get latest list of notes from the bear app, sorted by updated date.",
                    input_schema: json!({
                        "type": "object",
                        "properties": {
                            "number_of_notes": {
                                "type": "integer",
                                "minimum": 0,
                                "description": "Number of notes to return",
                            }
                        },
                        "required": ["number_of_notes"],
                    }),
                },
                handler: |ops, args| {
                    let args: ListArgs = decode("get_list_of_notes", args)?;
                    let count = u32::try_from(args.number_of_notes).unwrap_or(u32::MAX);
                    Ok(ops.list_recent(count))
                },
            },
            Tool {
                descriptor: ToolDescriptor {
                    name: "get_notes_by_tag",
                    description: "Get all notes that have a specific tag.",
                    input_schema: string_schema(
                        "tag",
                        "The tag to filter notes by (e.g. '#work', '#project')",
                    ),
                },
                handler: |ops, args| {
                    let args: TagArgs = decode("get_notes_by_tag", args)?;
                    Ok(ops.notes_by_tag(&args.tag))
                },
            },
            Tool {
                descriptor: ToolDescriptor {
                    name: "get_note_summary",
                    description: "Get the content of a specific note by its title.",
                    input_schema: string_schema("note_title", "The title of the note to retrieve"),
                },
                handler: |ops, args| {
                    let args: TitleArgs = decode("get_note_summary", args)?;
                    Ok(ops.note_summary(&args.note_title))
                },
            },
            Tool {
                descriptor: ToolDescriptor {
                    name: "delete_note",
                    description: "Delete a specific note from Bear by marking it as trashed.",
                    input_schema: string_schema("note_title", "The title of the note to delete"),
                },
                handler: |ops, args| {
                    let args: TitleArgs = decode("delete_note", args)?;
                    Ok(ops.delete_note(&args.note_title))
                },
            },
        ];
        Self { ops, tools }
    }

    pub fn ops(&self) -> &NoteOps {
        &self.ops
    }

    pub fn descriptors(&self) -> Vec<&ToolDescriptor> {
        self.tools.iter().map(|t| &t.descriptor).collect()
    }

    /// Decodes `arguments` for the named tool and runs it.
    pub fn call(&self, name: &str, arguments: Value) -> Result<String, ToolError> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.descriptor.name == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        debug!(tool = name, "calling tool");
        (tool.handler)(&self.ops, arguments)
    }
}
