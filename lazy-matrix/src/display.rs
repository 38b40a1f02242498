use super::*;

/// Renders one line per row with elements separated by a single space, followed by an empty
/// line. The formatter's precision and width flags are applied to every element.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                fmt::Display::fmt(value, f)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
