/// An element ordered by an integer key.
///
/// The public API sorts plain `i64`s; the algorithms are written against this
/// trait so stability can be observed on elements carrying extra payload.
pub(crate) trait Keyed: Copy {
    fn key(&self) -> i64;
}

impl Keyed for i64 {
    #[inline]
    fn key(&self) -> i64 {
        *self
    }
}
