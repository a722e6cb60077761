//! Boundary extension of a line of samples.
//!
//! If the raw data is given by the unprimed values shown below, the three modes
//! extend it as follows, where primed values equal their unprimed counterparts.
//!
//! ```text
//!   Reflect:   r1' g0' r0' | r0 g0 r1 g1 ... rn gn | gn' rn' gm'
//!   Mirror:    g1' r1' g0' | r0 g0 r1 g1 ... rn gn | rn' gm' rm'
//!   Constant:   0   0   0  | r0 g0 r1 g1 ... rn gn |  0   0   0
//! ```
//!
//! Both symmetric modes keep reflecting for offsets further away than the line
//! length, so a 5-tap kernel is well defined on a 1 or 2 pixel wide image.

/// How samples outside the image are synthesised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Border {
    /// Half-sample symmetric: the edge sample is repeated.
    Reflect,
    /// Whole-sample symmetric: reflection about the edge sample.
    Mirror,
    /// Zero outside the image.
    Constant,
}

impl Border {
    /// Map a possibly out-of-range index on a line of length `len` to the index
    /// holding its value, or `None` for [`Border::Constant`] outside the line.
    #[inline]
    pub fn index(self, i: isize, len: usize) -> Option<usize> {
        let n = len as isize;
        if (0..n).contains(&i) {
            return Some(i as usize);
        }
        match self {
            Border::Constant => None,
            _ if len == 1 => Some(0),
            Border::Reflect => {
                let i = i.rem_euclid(2 * n);
                let j = if i >= n { 2 * n - 1 - i } else { i };
                Some(j as usize)
            }
            Border::Mirror => {
                let i = i.rem_euclid(2 * n - 2);
                let j = if i >= n { 2 * n - 2 - i } else { i };
                Some(j as usize)
            }
        }
    }

    /// Copy `src` into the middle of `dst` and fill `padding` samples on either side.
    ///
    /// # Panics
    /// Panics if `dst.len() != src.len() + 2 * padding`.
    pub fn read_row<T: Copy + Default>(self, src: &[T], padding: usize, dst: &mut [T]) {
        assert_eq!(dst.len(), src.len() + 2 * padding);
        for (j, d) in dst.iter_mut().enumerate() {
            let i = j as isize - padding as isize;
            *d = self
                .index(i, src.len())
                .map(|k| src[k])
                .unwrap_or_default();
        }
    }
}
