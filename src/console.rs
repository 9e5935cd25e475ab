use super::*;

pub(crate) fn error(message: &str) {
  if io::stderr().is_terminal() {
    eprintln!("{} {message}", "error:".bold().red());
  } else {
    eprintln!("error: {message}");
  }
}

pub(crate) fn status(message: &str) {
  println!("{message}");
}

pub(crate) fn warn(message: &str) {
  if io::stderr().is_terminal() {
    eprintln!("{} {message}", "warning:".bold().yellow());
  } else {
    eprintln!("warning: {message}");
  }
}
