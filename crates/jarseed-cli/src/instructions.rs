//! Next-step instructions printed after a successful run.
//!
//! Tells the user how to point a project at the populated repository and
//! which single dependency pulls in every installed archive.

use std::io::{self, Write};

use anyhow::Result;
use console::style;

use jarseed_core::orchestration::RunReport;

/// Repository id suggested for the project's `<repositories>` entry.
const REPOSITORY_ID: &str = "project-repo";

/// Repository URL relative to the consuming project.
const REPOSITORY_URL: &str = "file://${project.basedir}/repo";

/// Writes the next-step guide for a finished run.
pub struct Instructions<W: Write = io::Stdout> {
    writer: W,
}

impl Instructions<io::Stdout> {
    pub fn new() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl Default for Instructions<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Instructions<W> {
    /// Create instructions with a custom writer (for testing).
    #[cfg(test)]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn render(&mut self, report: &RunReport) -> Result<()> {
        self.print_summary(report)?;
        self.print_repository_snippet()?;
        self.print_dependency_snippet(report)?;
        Ok(())
    }

    fn print_summary(&mut self, report: &RunReport) -> Result<()> {
        writeln!(
            self.writer,
            "{} Installed {} archive(s) into {}",
            style("Done.").bold().green(),
            report.installed.len(),
            report.repository_root.display()
        )?;
        for coordinate in &report.installed {
            writeln!(self.writer, "  {}", style(coordinate).cyan())?;
        }
        writeln!(self.writer, "Now you can ...")?;
        Ok(())
    }

    fn print_repository_snippet(&mut self) -> Result<()> {
        writeln!(
            self.writer,
            "{}",
            style("#1) Insert the following repository in your project's pom.xml:").bold()
        )?;
        writeln!(self.writer)?;
        let id = format!("         <id>{}</id>", REPOSITORY_ID);
        let url = format!("         <url>{}</url>", REPOSITORY_URL);
        let lines = [
            "   <repositories>",
            "      <repository>",
            id.as_str(),
            "         <releases>",
            "            <enabled>true</enabled>",
            "            <checksumPolicy>ignore</checksumPolicy>",
            "         </releases>",
            "         <snapshots>",
            "            <enabled>false</enabled>",
            "         </snapshots>",
            url.as_str(),
            "      </repository>",
            "   </repositories>",
        ];
        for line in lines {
            writeln!(self.writer, "{}", line)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_dependency_snippet(&mut self, report: &RunReport) -> Result<()> {
        let descriptor = &report.descriptor;
        writeln!(
            self.writer,
            "{}",
            style("#2) Insert the following dependency in your project's pom.xml:").bold()
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "  <dependency>")?;
        writeln!(self.writer, "     <groupId>{}</groupId>", descriptor.group)?;
        writeln!(
            self.writer,
            "     <artifactId>{}</artifactId>",
            descriptor.artifact_id
        )?;
        writeln!(self.writer, "     <version>{}</version>", descriptor.version)?;
        writeln!(self.writer, "     <type>pom</type>")?;
        writeln!(self.writer, "  </dependency>")?;
        writeln!(self.writer)?;
        Ok(())
    }
}
