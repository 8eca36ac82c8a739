mod input;
mod movavg;

extern crate getopts;

use getopts::Options;
use input::Scanner;
use movavg::{MovAvg, WINDOW_SIZE};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

fn run<R: BufRead, W: Write>(src: R, out: &mut W) -> Result<(), input::Error> {
  let mut scan = Scanner::new(src);

  let mut seed = [0f32; WINDOW_SIZE];
  for slot in seed.iter_mut() {
    *slot = scan.next_f32("seed value")?;
  }
  let mut avg = MovAvg::from_seed(seed);

  let data_size = scan.next_usize("update count")?;
  for _ in 0..data_size {
    let val = scan.next_f32("new value")?;
    writeln!(out, "New value: {:.2}, Moving avg: {:.2}", val, avg.push(val))?;
  }

  Ok(())
}

enum Command {
  Run { file: Option<String> },
  Help(String, Option<String>),
}

fn parse_options(args: &[String]) -> Command {
  let mut opts = Options::new();
  opts.optflag("h", "help", "Print this message.");
  opts.optopt("f", "file", "Read samples from FILE instead of standard input.", "FILE");

  let brief = format!("Usage: {} [options]\n\n\
                       Reads 5 seed samples, an update count, and that many new samples,\n\
                       printing the 5-sample moving average after each update.", args[0]);
  let options_str = opts.usage(&brief);

  let matches = match opts.parse(&args[1..]) {
    Ok(m) => { m }
    Err(e) => { return Command::Help(options_str, Some(format!("{}", e))); }
  };

  if !matches.free.is_empty() {
    return Command::Help(options_str, Some(format!("Unknown argument: {}", matches.free[0])));
  }

  if matches.opt_present("h") {
    return Command::Help(options_str, None);
  }

  Command::Run{ file: matches.opt_str("f") }
}

fn main() {
  let args: Vec<String> = std::env::args().collect();

  let res = match parse_options(&args) {
    Command::Help(options_str, err) => {
      if let Some(err_str) = err {
        println!("{}", err_str);
      }
      println!("{}", options_str);
      return;
    }
    Command::Run{ file } => {
      let stdout = std::io::stdout();
      let mut out = stdout.lock();
      match file {
        Some(fname) => {
          File::open(&fname)
            .map_err(input::Error::Io)
            .and_then(|f| run(BufReader::new(f), &mut out))
        }
        None => {
          let stdin = std::io::stdin();
          let locked = stdin.lock();
          run(locked, &mut out)
        }
      }
    }
  };

  if let Err(e) = res {
    eprintln!("{}", e);
    std::process::exit(1);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  fn run_str(input: &str) -> Result<String, input::Error> {
    let mut out = Vec::new();
    run(Cursor::new(input.as_bytes().to_vec()), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
  }

  #[test]
  fn single_update() {
    assert_eq!(run_str("1 2 3 4 5\n1\n10\n").unwrap(),
               "New value: 10.00, Moving avg: 4.80\n");
  }

  #[test]
  fn window_fills_in_order() {
    assert_eq!(run_str("0 0 0 0 0\n5\n5 5 5 5 5\n").unwrap(),
               "New value: 5.00, Moving avg: 1.00\n\
                New value: 5.00, Moving avg: 2.00\n\
                New value: 5.00, Moving avg: 3.00\n\
                New value: 5.00, Moving avg: 4.00\n\
                New value: 5.00, Moving avg: 5.00\n");
  }

  #[test]
  fn wrap_evicts_seed_then_stream() {
    // Updates 1 and 6 both land on slot 0: the first evicts the seed's
    // 1, the sixth evicts the streamed 10.
    assert_eq!(run_str("1 2 3 4 5\n6\n10 20 30 40 50 60\n").unwrap(),
               "New value: 10.00, Moving avg: 4.80\n\
                New value: 20.00, Moving avg: 8.40\n\
                New value: 30.00, Moving avg: 13.80\n\
                New value: 40.00, Moving avg: 21.00\n\
                New value: 50.00, Moving avg: 30.00\n\
                New value: 60.00, Moving avg: 40.00\n");
  }

  #[test]
  fn zero_updates() {
    assert_eq!(run_str("1 2 3 4 5\n0\n").unwrap(), "");
  }

  #[test]
  fn extra_tokens_are_ignored() {
    assert_eq!(run_str("1 2 3 4 5 1 10 99 bogus").unwrap(),
               "New value: 10.00, Moving avg: 4.80\n");
  }

  #[test]
  fn bad_seed_fails() {
    match run_str("1 2 x 4 5\n0\n") {
      Err(input::Error::Parse{ what, ref token }) => {
        assert_eq!(what, "seed value");
        assert_eq!(token, "x");
      }
      other => panic!("expected Parse, got {:?}", other),
    }
  }

  #[test]
  fn bad_count_fails() {
    match run_str("1 2 3 4 5\n-1\n") {
      Err(input::Error::Parse{ what, .. }) => assert_eq!(what, "update count"),
      other => panic!("expected Parse, got {:?}", other),
    }
  }

  #[test]
  fn truncated_stream_fails() {
    match run_str("1 2 3 4 5\n3\n10 20\n") {
      Err(input::Error::Eof(what)) => assert_eq!(what, "new value"),
      other => panic!("expected Eof, got {:?}", other),
    }
  }
}
