//! Backwards file reading: the last line of a log is the only query the
//! stores ever run, so it must not cost a full scan.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};

const CHUNK: u64 = 4096;

fn is_eol(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// Return the last line that holds anything besides line terminators.
/// `Ok(None)` means the file is empty or only contains blank lines.
pub fn last_line(file: &mut File) -> io::Result<Option<String>> {
    let mut pos = file.metadata()?.len();
    let mut buf: Vec<u8> = Vec::new();

    loop {
        if let Some(end) = buf.iter().rposition(|&b| !is_eol(b)) {
            if let Some(start) = buf[..end].iter().rposition(|&b| b == b'\n') {
                return decode(&buf[start + 1..=end]).map(Some);
            }
            if pos == 0 {
                return decode(&buf[..=end]).map(Some);
            }
        } else if pos == 0 {
            return Ok(None);
        }

        let step = CHUNK.min(pos);
        pos -= step;
        file.seek(SeekFrom::Start(pos))?;

        let mut chunk = vec![0u8; step as usize];
        file.read_exact(&mut chunk)?;
        chunk.extend_from_slice(&buf);
        buf = chunk;
    }
}

/// Count the line terminator bytes at the very end of the file.
pub fn trailing_eol_len(file: &mut File) -> io::Result<u64> {
    let len = file.metadata()?.len();
    let mut pos = len;
    let mut count = 0u64;

    while pos > 0 {
        let step = CHUNK.min(pos);
        pos -= step;
        file.seek(SeekFrom::Start(pos))?;

        let mut chunk = vec![0u8; step as usize];
        file.read_exact(&mut chunk)?;

        let run = chunk.iter().rev().take_while(|&&b| is_eol(b)).count() as u64;
        count += run;
        if run < step {
            break;
        }
    }

    Ok(count)
}

fn decode(bytes: &[u8]) -> io::Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn file_with(content: &[u8]) -> File {
        let mut f = tempfile::tempfile().unwrap();
        f.write_all(content).unwrap();
        f
    }

    #[test]
    fn empty_and_blank_files_have_no_last_line() {
        assert_eq!(last_line(&mut file_with(b"")).unwrap(), None);
        assert_eq!(last_line(&mut file_with(b"\n\n\r\n")).unwrap(), None);
    }

    #[test]
    fn skips_trailing_terminators() {
        let mut f = file_with(b"first\nsecond\n\n");
        assert_eq!(last_line(&mut f).unwrap().as_deref(), Some("second"));

        let mut f = file_with(b"\nonly,1");
        assert_eq!(last_line(&mut f).unwrap().as_deref(), Some("only,1"));
    }

    #[test]
    fn finds_last_line_across_chunks() {
        let mut content = Vec::new();
        for i in 0..2000 {
            content.extend_from_slice(format!("line-{i}\n").as_bytes());
        }
        let long_tail = "x".repeat(CHUNK as usize + 17);
        content.extend_from_slice(long_tail.as_bytes());
        content.extend_from_slice(b"\r\n");

        let mut f = file_with(&content);
        assert_eq!(last_line(&mut f).unwrap(), Some(long_tail));
        assert_eq!(trailing_eol_len(&mut f).unwrap(), 2);
    }

    #[test]
    fn counts_no_terminator() {
        assert_eq!(trailing_eol_len(&mut file_with(b"a,1")).unwrap(), 0);
        assert_eq!(trailing_eol_len(&mut file_with(b"")).unwrap(), 0);
    }
}
