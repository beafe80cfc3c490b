#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const EMPLOYEES1: &str = "\
name,position,completed_tasks,performance,skills,team,experience_years
Alex Ivanov,Backend Developer,45,4.8,\"Python, Django, PostgreSQL, Docker\",API Team,5
Maria Petrova,Frontend Developer,38,4.7,\"React, TypeScript, Redux, CSS\",Web Team,4
John Smith,Data Scientist,29,4.6,\"Python, ML, SQL, Pandas\",AI Team,3
Anna Lee,DevOps Engineer,52,4.9,\"AWS, Kubernetes, Terraform, Ansible\",Infrastructure Team,6
";

pub const EMPLOYEES2: &str = "\
name,position,completed_tasks,performance,skills,team,experience_years
David Chen,Mobile Developer,36,4.6,\"Swift, Kotlin, React Native\",Mobile Team,3
Elena Popova,Backend Developer,43,4.8,\"Java, Spring Boot, MySQL\",API Team,4
Chris Wilson,QA Engineer,31,4.5,\"Selenium, Jest, Cypress\",Testing Team,3
Olga Smirnova,Frontend Developer,40,4.5,\"Vue.js, JavaScript, Webpack\",Web Team,3
";

/// Temporary directory holding input files for one test
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub input_dir: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let input_dir = temp_dir.path().join("input");
        fs::create_dir_all(&input_dir)?;

        Ok(Self { temp_dir, input_dir })
    }

    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.input_dir.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn missing_path(&self, name: &str) -> PathBuf {
        self.input_dir.join(name)
    }

    /// Both sample employee files
    pub fn sample_files(&self) -> Result<(PathBuf, PathBuf)> {
        Ok((
            self.create_input_file("employees1.csv", EMPLOYEES1)?,
            self.create_input_file("employees2.csv", EMPLOYEES2)?,
        ))
    }
}

/// Helper to run the perfreport binary in an isolated working directory
pub fn perfreport_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("perfreport").unwrap();
    cmd.current_dir(cwd)
        .env_remove("PERFREPORT_CONFIG")
        .env_remove("PERFREPORT_LOG")
        .env("NO_COLOR", "1");
    cmd
}
