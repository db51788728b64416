use num_traits::AsPrimitive;


/// Edge label that can be turned into a traversal cost
///
/// The cost must be deterministic and non-negative, searches assume that a
/// settled node can never be improved afterwards.
pub trait Criteria {
    fn cost(&self) -> f64;
}

macro_rules! primitive_criteria {
    ($($t:ty),*) => {
        $(
            impl Criteria for $t {
                fn cost(&self) -> f64 {
                    AsPrimitive::<f64>::as_(*self)
                }
            }
        )*
    };
}

primitive_criteria!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
