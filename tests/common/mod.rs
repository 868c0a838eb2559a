//! Common test helpers for integration tests
//!
//! Provides sample IaC sources and an isolated temporary project directory
//! for tests that read files from disk.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TERRAFORM_SOURCE: &str = r#"provider "aws" {
  region = "us-east-1"
}

resource "aws_s3_bucket" "logs" {
  bucket = "company-logs"
  acl    = "private"
}

resource "aws_s3_bucket" "my.bucket" {
  bucket = "company-public"
  acl    = "public-read"

  versioning {
    enabled = false
  }
}
"#;

pub const KUBERNETES_SOURCE: &str = r#"apiVersion: v1
kind: Pod
metadata:
  name: frontend
spec:
  containers:
    - name: app
      image: nginx:latest
      securityContext:
        privileged: true
    - name: sidecar
      image: busybox
      securityContext:
        privileged: true
"#;

pub const CLOUDFORMATION_SOURCE: &str = r#"{
  "Resources": {
    "MyBucket": {
      "Type": "AWS::S3::Bucket",
      "Properties": {
        "AccessControl": "PublicRead"
      }
    }
  }
}"#;

pub const DOCKERFILE_SOURCE: &str = "FROM node:14 AS build
WORKDIR /app
RUN apt-get update && apt-get install -y curl
COPY . .
FROM alpine:3.18
USER root
CMD [\"node\", \"server.js\"]
";

/// Split a source the way the locator does
pub fn lines_of(content: &str) -> Vec<String> {
    iac_line_locator::utils::split_source_lines(content)
}

/// Temporary project directory removed on drop
pub struct TestProject {
    temp_dir: TempDir,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn project_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a test file in the project directory
    ///
    /// # Arguments
    ///
    /// * `relative_path` - Path relative to project_dir (e.g., "main.tf", "k8s/pod.yaml")
    /// * `content` - File content
    pub fn create_file(&self, relative_path: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.project_dir().join(relative_path);

        // Create parent directories if needed
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&file_path, content)?;
        Ok(file_path)
    }
}
