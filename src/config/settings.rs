pub struct GradeSettings {
    pub max_grade: u32,
}

impl Default for GradeSettings {
    fn default() -> Self {
        Self { max_grade: 100 }
    }
}

pub struct ReportSettings {
    pub missing_value: &'static str,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self { missing_value: "-" }
    }
}

pub struct AppConfig {
    pub grades: GradeSettings,
    pub report: ReportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            grades: GradeSettings::default(),
            report: ReportSettings::default(),
        }
    }
}
