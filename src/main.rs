//! logjump - Device-Log Error Navigation
//!
//! Scans captured device-log output for error records with embedded source
//! references and jumps between them from an interactive prompt.

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    // Parse command-line arguments
    let matches = Command::new("logjump")
        .version(logjump::VERSION)
        .about("Jump between error records in device logs")
        .long_about(
            "logjump scans a captured device log for error records carrying \
             (file:line) source references, restricted to a package filter, \
             and navigates between them from an interactive prompt.",
        )
        .arg(
            Arg::new("file")
                .help("Path to the captured log to navigate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("package")
                .short('p')
                .long("package")
                .help("Package filter restricting matches to your own records")
                .required(true),
        )
        .arg(
            Arg::new("open")
                .long("open")
                .action(ArgAction::Append)
                .help("Register a source path as an open document (repeatable)"),
        )
        .get_matches();

    // Get the file path argument
    let file_path = PathBuf::from(
        matches
            .get_one::<String>("file")
            .expect("file argument is required"),
    );

    // Validate file exists
    if !file_path.exists() {
        anyhow::bail!("File does not exist: {}", file_path.display());
    }

    if !file_path.is_file() {
        anyhow::bail!("Path is not a regular file: {}", file_path.display());
    }

    // Wire the session and start the interactive command loop
    use logjump::app::Application;
    use logjump::docs::OpenDocuments;
    use logjump::session::Session;
    use logjump::stream::InMemoryLogStream;

    let mut docs = OpenDocuments::new();
    if let Some(paths) = matches.get_many::<String>("open") {
        for path in paths {
            docs.open(path);
        }
    }

    let mut session = Session::new(docs);
    session.attach_log(Box::new(InMemoryLogStream::from_file(&file_path)?));
    if let Some(package) = matches.get_one::<String>("package") {
        session.set_package_filter(package.as_str());
    }

    let mut app = Application::new(session);
    app.run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_constant() {
        // Ensure version is accessible
        assert!(!logjump::VERSION.is_empty());
    }
}
