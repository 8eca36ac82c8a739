extern crate std;

use std::fmt;
use std::io::BufRead;

#[derive(Debug)]
pub enum Error {
  Io(std::io::Error),
  Eof(&'static str),
  Parse { what: &'static str, token: String },
}

impl From<std::io::Error> for Error {
  fn from(err: std::io::Error) -> Error {
    Error::Io(err)
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      Error::Io(ref err) => write!(f, "read error: {}", err),
      Error::Eof(what) => write!(f, "input ended while reading {}", what),
      Error::Parse { what, ref token } => write!(f, "bad {}: {:?}", what, token),
    }
  }
}

// Pulls whitespace-separated tokens off a buffered source one at a time.
// Never consumes past the token's trailing delimiter, so the source stays
// usable when fed interactively.
pub struct Scanner<R> {
  src: R,
}

impl<R: BufRead> Scanner<R> {
  pub fn new(src: R) -> Scanner<R> {
    Scanner{ src: src }
  }

  pub fn next_token(&mut self) -> Result<Option<String>, Error> {
    let mut tok = Vec::new();
    loop {
      let (used, done) = {
        let buf = self.src.fill_buf()?;
        let mut used = 0;
        let mut done = buf.is_empty();
        for b in buf.iter() {
          if b.is_ascii_whitespace() {
            if !tok.is_empty() {
              used += 1;
              done = true;
              break;
            }
            used += 1;
          } else {
            tok.push(*b);
            used += 1;
          }
        }
        (used, done)
      };
      self.src.consume(used);
      if done || used == 0 {
        break;
      }
    }
    if tok.is_empty() {
      Ok(None)
    } else {
      Ok(Some(String::from_utf8_lossy(&tok).into_owned()))
    }
  }

  pub fn next_f32(&mut self, what: &'static str) -> Result<f32, Error> {
    let tok = self.next_token()?.ok_or(Error::Eof(what))?;
    tok.parse::<f32>().map_err(|_| Error::Parse{ what: what, token: tok })
  }

  pub fn next_usize(&mut self, what: &'static str) -> Result<usize, Error> {
    let tok = self.next_token()?.ok_or(Error::Eof(what))?;
    tok.parse::<usize>().map_err(|_| Error::Parse{ what: what, token: tok })
  }
}
