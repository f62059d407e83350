use clap::Parser;
use ingest_buffer::{IngestError, IngestResult, OverflowPolicy, RingBuffer};
use log::{info, warn};
use std::io::{self, BufRead, Write};

#[derive(Debug, Parser, PartialEq)]
#[clap(author, version, about = "Keep the last N lines of stdin", long_about = None)]
struct Args {
    #[clap(short = 'n', long, default_value_t = 10, help = "Number of lines to retain")]
    capacity: usize,
    #[clap(
        long,
        conflicts_with = "fill",
        help = "Drop incoming lines once full instead of evicting the oldest"
    )]
    strict: bool,
    #[clap(long, help = "Start with every slot holding this line")]
    fill: Option<String>,
}

fn build_ring(args: &Args) -> IngestResult<RingBuffer<String>> {
    match &args.fill {
        Some(value) => RingBuffer::with_default(args.capacity, value.clone()),
        None if args.strict => RingBuffer::new(args.capacity, OverflowPolicy::Reject),
        None => RingBuffer::evicting(args.capacity),
    }
}

/// Feeds every line of `reader` into `ring`. Returns how many lines were
/// rejected because the buffer was full.
fn ingest_lines<R: BufRead>(ring: &mut RingBuffer<String>, reader: R) -> IngestResult<usize> {
    let mut rejected = 0usize;
    for (lineno, line) in reader.lines().enumerate() {
        match ring.append(line?) {
            Ok(()) => {}
            Err(IngestError::Overflow { capacity }) => {
                warn!("line {} dropped, buffer full ({})", lineno + 1, capacity);
                rejected += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(rejected)
}

fn write_ring<W: Write>(ring: &RingBuffer<String>, mut out: W) -> IngestResult<()> {
    for line in ring {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

fn run(args: Args) -> IngestResult<()> {
    let mut ring = build_ring(&args)?;
    let rejected = ingest_lines(&mut ring, io::stdin().lock())?;
    info!(
        "retained {} of capacity {}, rejected {}",
        ring.len(),
        ring.capacity(),
        rejected
    );
    write_ring(&ring, io::stdout().lock())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("ring-tail: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(capacity: usize, strict: bool, fill: Option<&str>) -> Args {
        Args {
            capacity,
            strict,
            fill: fill.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_keeps_last_lines() {
        let mut ring = build_ring(&args(2, false, None)).unwrap();
        let rejected = ingest_lines(&mut ring, Cursor::new("a\nb\nc\n")).unwrap();
        assert_eq!(rejected, 0);
        let mut out = Vec::new();
        write_ring(&ring, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "b\nc\n");
    }

    #[test]
    fn test_strict_keeps_first_lines() {
        let mut ring = build_ring(&args(2, true, None)).unwrap();
        let rejected = ingest_lines(&mut ring, Cursor::new("a\nb\nc\n")).unwrap();
        assert_eq!(rejected, 1);
        assert_eq!(ring.to_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_fill_and_zero_capacity() {
        let mut ring = build_ring(&args(3, false, Some("-"))).unwrap();
        ingest_lines(&mut ring, Cursor::new("x\n")).unwrap();
        assert_eq!(ring.to_vec(), vec!["-", "-", "x"]);

        assert!(matches!(
            build_ring(&args(0, false, None)),
            Err(IngestError::InvalidCapacity(0))
        ));
    }

    #[test]
    fn test_parse_args() {
        let parsed = Args::try_parse_from(["ring-tail", "-n", "5", "--strict"]).unwrap();
        assert_eq!(parsed, args(5, true, None));
        assert!(Args::try_parse_from(["ring-tail", "--strict", "--fill", "x"]).is_err());
    }
}
