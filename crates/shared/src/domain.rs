use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(TaskId);

/// A single task as returned by the remote resource.
///
/// The server owns the record: it assigns `id` on create, and the client never
/// holds a `Task` past one render cycle. Each refresh discards the previous
/// snapshot entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub task: String,
    pub completed: bool,
}
