#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary working directory holding a catalog and optional config.
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    /// Create an empty temp directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a temp directory with the sample catalog at `data/programs.json`.
    pub fn with_catalog() -> Self {
        let project = Self::new();
        project.write_file("data/programs.json", SAMPLE_CATALOG);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.path().join("data/programs.json")
    }

    /// Write a file relative to the project root, creating parent dirs as needed.
    pub fn write_file(&self, relative_path: &str, content: &str) {
        let full = self.dir.path().join(relative_path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        std::fs::write(&full, content).expect("failed to write file");
    }

    /// A command for the binary, running inside the project directory with
    /// config and catalog env overrides cleared.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(Self::educonnect_bin());
        cmd.current_dir(self.path())
            .env_remove("EDUCONNECT_CONFIG")
            .env_remove("EDUCONNECT_CATALOG")
            .env_remove("TRANSPORT")
            .env_remove("PORT")
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env("RUST_LOG", "warn");
        cmd
    }

    /// Return the path to the educonnect binary (built via cargo).
    pub fn educonnect_bin() -> PathBuf {
        PathBuf::from(env!("CARGO_BIN_EXE_educonnect"))
    }
}

/// Parse stdout of a `--json` invocation.
pub fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

/// Five programs covering both types, several organizations and edge-case prices.
pub const SAMPLE_CATALOG: &str = r#"{
  "total": 5,
  "nano_degrees": [
    {
      "id": 1,
      "type": "nanodegree",
      "title": "حماية البيانات الشخصية",
      "summary": "مبادئ الخصوصية",
      "price": "300",
      "additional_price": "0",
      "organization": {"id": "org-a", "name": "أكاديمية طويق", "logo": "a.png"}
    },
    {
      "id": 2,
      "type": "nanodegree",
      "title": "الأمن السيبراني",
      "summary": "حماية الأنظمة والشبكات",
      "price": "400",
      "additional_price": "150",
      "organization": {"id": "org-a", "name": "أكاديمية طويق", "logo": "a.png"}
    },
    {
      "id": 3,
      "type": "academic_degree",
      "title": "دبلوم المحاسبة",
      "summary": "المحاسبة المالية",
      "price": "5000",
      "additional_price": "",
      "organization": {"id": "org-b", "name": "جامعة الملك سعود", "logo": "b.png"},
      "slug": "accounting-diploma",
      "rating_result": {"rating_count": 8, "rating_avg": 4},
      "total_pathways_price": 0,
      "discount": null
    },
    {
      "id": 4,
      "type": "nanodegree",
      "title": "أساسيات التسويق",
      "summary": "التسويق الرقمي",
      "price": "500",
      "additional_price": "0",
      "organization": {"id": "org-c", "name": "مؤسسة مسك", "logo": "c.png"}
    },
    {
      "id": 5,
      "type": "academic_degree",
      "title": "دبلوم القانون",
      "summary": "الأنظمة والحقوق",
      "price": "مجاني",
      "additional_price": "0",
      "organization": {"id": "org-b", "name": "جامعة الملك سعود", "logo": "b.png"}
    }
  ]
}"#;
