use log::{debug, trace};
use rwc_shared_kernel::{InputSource, LineCount, Result, RwcError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};

/// Opens the input for reading.
///
/// `Stdin` locks standard input; a file is wrapped in a `BufReader`.
pub fn open_input(input: &InputSource) -> Result<Box<dyn BufRead>> {
    match input {
        InputSource::Stdin => {
            debug!("reading from standard input");
            Ok(Box::new(io::stdin().lock()))
        }
        InputSource::File(path) => {
            debug!("opening {}", path.display());
            let file = File::open(path).map_err(|source| RwcError::Open {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Counts the input and releases the handle before returning.
pub fn count_input(input: &InputSource) -> Result<LineCount> {
    let mut reader = open_input(input)?;
    count_lines(&mut reader)
}

/// Counts newline-delimited segments in a single buffered pass.
///
/// A final segment without a trailing `\n` still counts as a line, so
/// `"a\nb"` yields 2 and an empty stream yields 0.
pub fn count_lines<R: BufRead + ?Sized>(reader: &mut R) -> Result<LineCount> {
    let mut lines = LineCount::ZERO;
    let mut last_byte: Option<u8> = None;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => return Err(RwcError::Read { source }),
        };
        if buf.is_empty() {
            break;
        }

        last_byte = buf.last().copied();
        lines += bytecount::count(buf, b'\n');

        let len = buf.len();
        trace!("consumed {len} bytes");
        reader.consume(len);
    }

    // 末尾に改行がない場合の行カウント補正
    if matches!(last_byte, Some(b) if b != b'\n') {
        lines += 1;
    }

    Ok(lines)
}
