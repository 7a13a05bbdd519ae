use serde::{Deserialize, Serialize};

/// Deployment variant of the class form.
///
/// - `Department` → department + year (the department/year form)
/// - `Class`      → explicit class name + semester
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Department,
    Class,
}

/// Class metadata of a draft/record. Superset of every profile's fields;
/// the unused ones simply stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassInfo {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub class_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub department: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub year: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub semester: String,
    pub cc_name: String,
    pub total_students: Option<u32>,
}

/// Editable class fields, one per form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassField {
    ClassName,
    Department,
    Year,
    Semester,
    CcName,
    TotalStudents,
}

impl ClassInfo {
    /// Class identifier used for the natural key.
    ///
    /// An explicit class name always wins. With the department profile the
    /// identifier falls back to "<department> <year>". Empty means "not set".
    pub fn identifier(&self, profile: Profile) -> String {
        let name = self.class_name.trim();
        if !name.is_empty() {
            return name.to_string();
        }

        match profile {
            Profile::Class => String::new(),
            Profile::Department => {
                if self.department.trim().is_empty() {
                    return String::new();
                }
                format!("{} {}", self.department.trim(), self.year.trim())
                    .trim()
                    .to_string()
            }
        }
    }

    /// Human label for headers ("CE 1st Year", or a placeholder).
    pub fn display_name(&self, profile: Profile) -> String {
        let id = self.identifier(profile);
        if id.is_empty() {
            "your class".to_string()
        } else {
            id
        }
    }

    pub fn set(&mut self, field: ClassField, value: &str) -> Result<(), String> {
        match field {
            ClassField::ClassName => self.class_name = value.to_string(),
            ClassField::Department => self.department = value.to_string(),
            ClassField::Year => self.year = value.to_string(),
            ClassField::Semester => self.semester = value.to_string(),
            ClassField::CcName => self.cc_name = value.to_string(),
            ClassField::TotalStudents => {
                let v = value.trim();
                self.total_students = if v.is_empty() {
                    None
                } else {
                    Some(
                        v.parse::<u32>()
                            .map_err(|_| format!("Total strength must be a number, got '{v}'"))?,
                    )
                };
            }
        }
        Ok(())
    }
}
