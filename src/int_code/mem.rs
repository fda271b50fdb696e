use std::collections::HashMap;

use crate::Error;

// Writes further than this beyond the dense part go into the sparse part.
const MAX_DENSE_GAP: usize = 1 << 16;

/// Memory tape of int code process, grows on write and reads zero beyond populated part.
///
/// Loaded image and nearby writes live in a dense vector, far writes in a sparse map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Vec<i64>,
    far_cells: HashMap<usize, i64>,
    end: usize,
}

impl From<&[i64]> for Memory {
    fn from(image: &[i64]) -> Self {
        Self {
            cells: Vec::from(image),
            far_cells: HashMap::new(),
            end: image.len(),
        }
    }
}

impl Memory {
    /// One past the highest populated address.
    pub fn len(&self) -> usize {
        self.end
    }

    /// Dense part of memory, starting from address 0.
    pub fn as_slice(&self) -> &[i64] {
        &self.cells
    }

    pub fn read(&self, addr: i64) -> Result<i64, Error> {
        let ind = Self::index(addr)?;
        let value = match self.cells.get(ind) {
            Some(&v) => v,
            None => self.far_cells.get(&ind).copied().unwrap_or(0),
        };

        Ok(value)
    }

    pub fn write(&mut self, addr: i64, value: i64) -> Result<(), Error> {
        let ind = Self::index(addr)?;
        if ind < self.cells.len() {
            self.cells[ind] = value;
        } else if ind - self.cells.len() < MAX_DENSE_GAP {
            self.grow_dense(ind + 1);
            self.cells[ind] = value;
        } else {
            self.far_cells.insert(ind, value);
        }

        self.end = self.end.max(ind.saturating_add(1));
        Ok(())
    }

    // Sparse cells covered by the grown vector move into it.
    fn grow_dense(&mut self, new_len: usize) {
        self.cells.resize(new_len, 0);
        if self.far_cells.is_empty() {
            return;
        }

        let covered = self
            .far_cells
            .keys()
            .copied()
            .filter(|&ind| ind < new_len)
            .collect::<Vec<_>>();
        for ind in covered {
            if let Some(v) = self.far_cells.remove(&ind) {
                self.cells[ind] = v;
            }
        }
    }

    fn index(addr: i64) -> Result<usize, Error> {
        usize::try_from(addr).map_err(|_| Error::OutOfBoundsAddress(addr))
    }
}
