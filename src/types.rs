use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// An educational program from the catalog.
///
/// Only the fields search, filtering and summaries need are typed. The
/// catalog record itself is kept as-is and is what gets serialized, so tool
/// results echo every source field with its original JSON representation.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub id: i64,
    pub program_type: ProgramType,
    pub title: String,
    pub summary: String,
    /// Base price as text, e.g. "300" or "0"
    pub price: String,
    pub additional_price: String,
    pub organization: Organization,
    source: Value,
}

/// Typed view over a catalog record
#[derive(Deserialize)]
struct ProgramFields {
    id: i64,
    #[serde(rename = "type")]
    program_type: ProgramType,
    title: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    price: String,
    #[serde(default)]
    additional_price: String,
    organization: Organization,
}

impl Program {
    /// The catalog record this program was read from
    pub fn source(&self) -> &Value {
        &self.source
    }
}

impl<'de> Deserialize<'de> for Program {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = Value::deserialize(deserializer)?;
        let fields = ProgramFields::deserialize(&source).map_err(serde::de::Error::custom)?;
        Ok(Program {
            id: fields.id,
            program_type: fields.program_type,
            title: fields.title,
            summary: fields.summary,
            price: fields.price,
            additional_price: fields.additional_price,
            organization: fields.organization,
            source,
        })
    }
}

impl Serialize for Program {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.source.serialize(serializer)
    }
}

/// Kind of program offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProgramType {
    AcademicDegree,
    Nanodegree,
}

impl ProgramType {
    /// Label used in human-readable summaries
    pub fn label(self) -> &'static str {
        match self {
            ProgramType::AcademicDegree => "diploma",
            ProgramType::Nanodegree => "nano-degree",
        }
    }
}

impl std::fmt::Display for ProgramType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgramType::AcademicDegree => write!(f, "academic_degree"),
            ProgramType::Nanodegree => write!(f, "nanodegree"),
        }
    }
}

impl std::str::FromStr for ProgramType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "academic_degree" => Ok(ProgramType::AcademicDegree),
            "nanodegree" => Ok(ProgramType::Nanodegree),
            other => Err(format!(
                "Unknown program type '{other}'. Use 'academic_degree' or 'nanodegree'"
            )),
        }
    }
}

/// The organization offering a program
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: String,
}
