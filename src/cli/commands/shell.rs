//! Interactive calculator shell
//!
//! One line per command, mapped onto the session operations. Archive
//! changes reach the prompt through a subscription, the same way a UI
//! would hear about them.

use gpa_calc::config::Config;
use gpa_calc::core::models::{CourseField, CourseId, GradeScale};
use gpa_calc::core::report::{default_output_path, export, ReportFormat, ReportOptions};
use gpa_calc::core::session::ArchiveEvent;
use gpa_calc::core::worksheet::load_session;
use gpa_calc::core::Session;
use gpa_calc::{debug, error};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

const HELP: &str = "\
Commands:
  add [NAME]                 add a course row
  edit ID FIELD VALUE        set name, credits or grade of a row
  rm ID                      remove a course row
  commit                     archive the current semester and start a new one
  semester GPA CREDITS       archive a past semester typed by hand
  list                       show course rows
  show                       show semester GPA, standing and CGPA
  export [FORMAT] [PATH]     write a report (markdown, html, pdf; default pdf)
  scale                      show the grade scale
  help                       show this help
  quit                       leave the shell";

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Append a row, optionally named
    Add(Option<String>),
    /// Overwrite one field of a row
    Edit(CourseId, CourseField, String),
    /// Delete a row
    Remove(CourseId),
    /// Archive the current semester
    Commit,
    /// Archive a hand-typed semester
    Semester(String, String),
    /// Print course rows
    List,
    /// Print derived values
    Show,
    /// Export a report
    Export(Option<ReportFormat>, Option<PathBuf>),
    /// Print the grade scale
    Scale,
    /// Print usage
    Help,
    /// Leave the shell
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// # Errors
/// Returns a usage message for unknown commands or missing arguments.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    let Some(word) = line.split_whitespace().next() else {
        return Ok(None);
    };
    let rest = line[word.len()..].trim_start();
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match word.to_ascii_lowercase().as_str() {
        "add" => ShellCommand::Add((!rest.is_empty()).then(|| rest.to_string())),
        "edit" => {
            let (id, after_id) = split_word(rest);
            let (field, value) = split_word(after_id);
            if field.is_empty() {
                return Err("usage: edit ID FIELD VALUE".to_string());
            }
            ShellCommand::Edit(id.parse()?, field.parse()?, value.to_string())
        }
        "rm" | "remove" => match args.as_slice() {
            [id] => ShellCommand::Remove(id.parse()?),
            _ => return Err("usage: rm ID".to_string()),
        },
        "commit" => ShellCommand::Commit,
        "semester" => match args.as_slice() {
            [gpa, credits] => ShellCommand::Semester((*gpa).to_string(), (*credits).to_string()),
            _ => return Err("usage: semester GPA CREDITS".to_string()),
        },
        "list" | "ls" => ShellCommand::List,
        "show" => ShellCommand::Show,
        "export" => match args.as_slice() {
            [] => ShellCommand::Export(None, None),
            [format] => ShellCommand::Export(Some(format.parse()?), None),
            [format, path] => {
                ShellCommand::Export(Some(format.parse()?), Some(PathBuf::from(path)))
            }
            _ => return Err("usage: export [FORMAT] [PATH]".to_string()),
        },
        "scale" => ShellCommand::Scale,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("Unknown command: '{other}' (type 'help')")),
    };
    Ok(Some(command))
}

/// First word and the trimmed remainder of `text`
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.find(char::is_whitespace) {
        Some(end) => (&text[..end], text[end..].trim_start()),
        None => (text, ""),
    }
}

/// Shell state: the session plus pending archive notifications
pub struct Shell {
    session: Session,
    reports_dir: PathBuf,
    options: ReportOptions,
    archived: Rc<RefCell<Vec<ArchiveEvent>>>,
}

impl Shell {
    /// Wrap a session, listening for archive appends
    pub fn new(mut session: Session, reports_dir: PathBuf, options: ReportOptions) -> Self {
        let archived = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&archived);
        session.subscribe_archive(move |event: &ArchiveEvent| sink.borrow_mut().push(event.clone()));
        Self {
            session,
            reports_dir,
            options,
            archived,
        }
    }

    /// The wrapped session
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Run one command, writing its output to `out`.
    ///
    /// Returns `false` when the shell should stop.
    ///
    /// # Errors
    /// Returns an error only if writing to `out` fails.
    pub fn execute<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> io::Result<bool> {
        debug!("shell command: {command:?}");
        match command {
            ShellCommand::Add(name) => {
                let id = match name {
                    Some(name) => self.session.add_course_with(&name, "", ""),
                    None => self.session.add_course(),
                };
                writeln!(out, "✓ Added course #{id}")?;
            }
            ShellCommand::Edit(id, field, value) => {
                if self.session.edit_course(id, field, &value) {
                    writeln!(out, "✓ Set {field} of #{id} = {value}")?;
                } else {
                    writeln!(out, "✗ No course #{id}")?;
                }
            }
            ShellCommand::Remove(id) => {
                if self.session.remove_course(id) {
                    writeln!(out, "✓ Removed course #{id}")?;
                } else {
                    writeln!(out, "✗ No course #{id}")?;
                }
            }
            ShellCommand::Commit => {
                if self.session.commit_current().is_none() {
                    writeln!(out, "✗ Nothing to commit: no course row counts toward a GPA")?;
                }
            }
            ShellCommand::Semester(gpa, credits) => {
                if let Err(e) = self.session.add_semester(&gpa, &credits) {
                    writeln!(out, "✗ Semester not added: {e}")?;
                }
            }
            ShellCommand::List => self.write_courses(out)?,
            ShellCommand::Show => self.write_results(out)?,
            ShellCommand::Export(format, path) => {
                let format = format.unwrap_or(ReportFormat::Pdf);
                self.export_report(format, path.as_deref(), out)?;
            }
            ShellCommand::Scale => {
                for entry in GradeScale::entries() {
                    writeln!(
                        out,
                        "  {:<3} {:.2}  {}",
                        entry.letter, entry.point, entry.standing_label
                    )?;
                }
            }
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => return Ok(false),
        }
        self.drain_notifications(out)?;
        Ok(true)
    }

    fn drain_notifications<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for event in self.archived.borrow_mut().drain(..) {
            let ArchiveEvent::Appended { index, summary } = event;
            writeln!(out, "✓ Semester {} archived: {summary}", index + 1)?;
            writeln!(out, "  CGPA is now {}", self.session.cgpa())?;
        }
        Ok(())
    }

    fn write_courses<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for course in self.session.courses() {
            let marker = if course.is_countable() { "" } else { "  (excluded)" };
            let name = if course.name.is_empty() { "-" } else { &course.name };
            writeln!(
                out,
                "  {:<5} {name} | {} CH | Grade: {}{marker}",
                format!("#{}", course.id),
                course.credits,
                course.grade
            )?;
        }
        Ok(())
    }

    fn write_results<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let snapshot = self.session.snapshot();
        if snapshot.has_current() {
            writeln!(out, "Semester GPA: {}", snapshot.semester_gpa_text())?;
            writeln!(out, "Credit Hours: {}", snapshot.total_credits_text())?;
            writeln!(out, "Status:       {}", snapshot.standing_text())?;
        } else {
            writeln!(out, "Semester GPA: --")?;
        }
        for line in snapshot.semester_lines() {
            writeln!(
                out,
                "Semester {}: GPA {}, Credits {}",
                line.number, line.gpa, line.credits
            )?;
        }
        writeln!(out, "CGPA:         {}", snapshot.cgpa)
    }

    fn export_report<W: Write>(
        &self,
        format: ReportFormat,
        path: Option<&Path>,
        out: &mut W,
    ) -> io::Result<()> {
        let output_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                if let Err(e) = std::fs::create_dir_all(&self.reports_dir) {
                    error!("cannot create {}: {e}", self.reports_dir.display());
                    return writeln!(
                        out,
                        "✗ Failed to create reports directory {}: {e}",
                        self.reports_dir.display()
                    );
                }
                default_output_path(&self.reports_dir, format)
            }
        };

        // A failed export is only reported; the session is untouched
        match export(&self.session.snapshot(), format, &output_path, &self.options) {
            Ok(()) => writeln!(out, "✓ Report generated: {}", output_path.display()),
            Err(e) => writeln!(out, "✗ Failed to export {format} report: {e}"),
        }
    }
}

/// Run the interactive shell on stdin/stdout
pub fn run(input_file: Option<&Path>, config: &Config) {
    let session = match input_file.map(load_session).transpose() {
        Ok(session) => session.unwrap_or_default(),
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    let mut shell = Shell::new(
        session,
        PathBuf::from(&config.paths.reports_dir),
        config.report_options(),
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("gpacalc shell. Type 'help' for commands.");
    loop {
        print!("gpa> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("✗ Failed to read input: {e}");
                break;
            }
        }

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("✗ {e}");
                continue;
            }
        };

        match shell.execute(command, &mut stdout) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                eprintln!("✗ Failed to write output: {e}");
                break;
            }
        }
    }
}
