//! Common parsing utilities

/// Position and length of the next Annex-B start code (`00 00 01` or `00 00 00 01`)
/// at or after `from`
fn find_start_code(data: &[u8], from: usize) -> Option<(usize, usize)> {
    let mut i = from;
    while i + 3 <= data.len() {
        if data[i] == 0x00 && data[i + 1] == 0x00 {
            if data[i + 2] == 0x01 {
                return Some((i, 3));
            }
            if data[i + 2] == 0x00 && i + 3 < data.len() && data[i + 3] == 0x01 {
                return Some((i, 4));
            }
        }
        i += 1;
    }
    None
}

/// Iterator over the NAL units of an Annex-B byte stream, start codes stripped
pub struct NalUnits<'a> {
    data: &'a [u8],
    next: Option<usize>,
}

impl<'a> Iterator for NalUnits<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.next?;
            let nal = match find_start_code(self.data, start) {
                Some((pos, len)) => {
                    self.next = Some(pos + len);
                    &self.data[start..pos]
                }
                None => {
                    self.next = None;
                    &self.data[start..]
                }
            };
            if !nal.is_empty() {
                return Some(nal);
            }
        }
    }
}

/// Splits an Annex-B payload into NAL units. Bytes before the first start code are dropped.
pub fn nal_units(data: &[u8]) -> NalUnits<'_> {
    NalUnits {
        data,
        next: find_start_code(data, 0).map(|(pos, len)| pos + len),
    }
}
