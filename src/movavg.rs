extern crate std;

pub const WINDOW_SIZE: usize = 5;

// Fixed-capacity ring accumulator. The slot under `pos` is always the
// oldest sample; inserting overwrites it and advances the cursor.
#[derive(Debug)]
pub struct MovAvg<T> {
  vals: [T; WINDOW_SIZE],
  total: T,
  pos: usize,
}

impl<T: std::ops::Add<Output=T> +
        std::ops::Sub<Output=T> +
        std::ops::Div<Output=T> +
        std::convert::From<i16> +
        std::marker::Copy> MovAvg<T> {
  pub fn from_seed(seed: [T; WINDOW_SIZE]) -> MovAvg<T> {
    let mut total = T::from(0i16);
    for val in seed.iter() {
      total = total + *val;
    }
    MovAvg{ vals: seed, total: total, pos: 0 }
  }

  // Evicts the oldest sample, inserts `val` in its place, and returns
  // the updated average. The total is adjusted incrementally rather
  // than recomputed from the window.
  pub fn push(&mut self, val: T) -> T {
    self.total = self.total - self.vals[self.pos];
    self.vals[self.pos] = val;
    self.total = self.total + val;
    self.pos = (self.pos + 1) % WINDOW_SIZE;
    self.avg()
  }

  pub fn avg(&self) -> T {
    self.total / T::from(WINDOW_SIZE as i16)
  }
}
