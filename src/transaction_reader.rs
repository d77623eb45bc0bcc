use crate::itemizer::Itemizer;
use crate::itemset::ItemSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

// Reads one transaction per line. Items are separated by whitespace or
// commas; blank lines are skipped.
pub struct TransactionReader<'a, R: BufRead> {
    reader: R,
    itemizer: &'a mut Itemizer,
    line: String,
}

impl<'a> TransactionReader<'a, BufReader<File>> {
    pub fn open<P: AsRef<Path>>(
        path: P,
        itemizer: &'a mut Itemizer,
    ) -> io::Result<TransactionReader<'a, BufReader<File>>> {
        let file = File::open(path)?;
        Ok(TransactionReader::new(BufReader::new(file), itemizer))
    }
}

impl<'a, R: BufRead> TransactionReader<'a, R> {
    pub fn new(reader: R, itemizer: &'a mut Itemizer) -> TransactionReader<'a, R> {
        TransactionReader {
            reader,
            itemizer,
            line: String::new(),
        }
    }
}

impl<'a, R: BufRead> Iterator for TransactionReader<'a, R> {
    type Item = io::Result<ItemSet>;

    fn next(&mut self) -> Option<io::Result<ItemSet>> {
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => return Some(Err(err)),
            }
            let itemizer = &mut *self.itemizer;
            let transaction: ItemSet = self
                .line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(|token| itemizer.id_of(token))
                .collect();
            if !transaction.is_empty() {
                return Some(Ok(transaction));
            }
        }
    }
}
