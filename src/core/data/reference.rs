use std::fmt;

use serde::{Serialize, Serializer};

use super::BlockType;

/// Whether a dataset is created inside a macro definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum MacroContext {
    #[default]
    TopLevel,
    InsideMacro,
}

impl MacroContext {
    pub fn from_in_macro(in_macro: bool) -> Self {
        if in_macro {
            MacroContext::InsideMacro
        } else {
            MacroContext::TopLevel
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MacroContext::TopLevel => "",
            MacroContext::InsideMacro => "Inside Macro",
        }
    }
}

impl fmt::Display for MacroContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MacroContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A permanent dataset created by a statement in a source file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatasetReference {
    /// Path of the file as enumerated (absolute or relative to the working directory).
    pub source_file: String,
    /// Start line of the enclosing block, not the line containing the name.
    pub line_number: usize,
    pub block_type: BlockType,
    /// `library.member`, as written in the source.
    pub dataset_name: String,
    pub context: MacroContext,
}

impl DatasetReference {
    /// Library component of the dataset name.
    pub fn library(&self) -> &str {
        self.dataset_name
            .split_once('.')
            .map_or(self.dataset_name.as_str(), |(lib, _)| lib)
    }

    /// Member component of the dataset name.
    pub fn member(&self) -> &str {
        self.dataset_name
            .split_once('.')
            .map_or("", |(_, member)| member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_and_member() {
        let reference = DatasetReference {
            source_file: "load.sas".to_string(),
            line_number: 3,
            block_type: BlockType::DataStep,
            dataset_name: "Lib1.Sales".to_string(),
            context: MacroContext::TopLevel,
        };
        assert_eq!(reference.library(), "Lib1");
        assert_eq!(reference.member(), "Sales");
    }

    #[test]
    fn test_macro_context_strings() {
        assert_eq!(MacroContext::from_in_macro(true).as_str(), "Inside Macro");
        assert_eq!(MacroContext::from_in_macro(false).as_str(), "");
        assert_eq!(
            serde_json::to_string(&MacroContext::InsideMacro).unwrap(),
            "\"Inside Macro\""
        );
    }
}
