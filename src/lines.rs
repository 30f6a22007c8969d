use std::io::{BufRead, BufReader, Read};
use std::str;

use crate::error::FetchError;

/// Lines of a streaming NDJSON response body.
///
/// Each `next` call blocks until a full line has arrived from the network
/// or the server closes the stream; the iterator is only finite once that
/// close happens. It cannot be rewound — reading the data again means
/// issuing a fresh request.
pub struct NdjsonLines<R> {
    reader: BufReader<R>,
    line: u64,
    buf: Vec<u8>,
}

impl<R: Read> NdjsonLines<R> {
    pub fn new(body: R) -> Self {
        Self {
            reader: BufReader::new(body),
            line: 0,
            buf: Vec::new(),
        }
    }
}

impl<R: Read> Iterator for NdjsonLines<R> {
    type Item = Result<String, FetchError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line += 1;
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                }
                if self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }
                match str::from_utf8(&self.buf) {
                    Ok(text) => Some(Ok(text.to_owned())),
                    Err(_) => Some(Err(FetchError::Decode { line: self.line })),
                }
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
