//! Fixed-arity tuple plumbing for [`Chain`](super::Chain).
//!
//! `Append` grows a tuple by one slot at the end, `First` projects slot 0.
//! Both are implemented up to twelve slots.

use super::Rule;

pub trait Append<T> {
    type Output;

    fn append(self, value: T) -> Self::Output;
}

impl<T> Append<T> for () {
    type Output = (T,);

    fn append(self, value: T) -> (T,) {
        (value,)
    }
}

macro_rules! impl_append {
    ($($slot:ident),+) => {
        impl<$($slot,)+ T> Append<T> for ($($slot,)+) {
            type Output = ($($slot,)+ T);

            #[allow(non_snake_case)]
            fn append(self, value: T) -> Self::Output {
                let ($($slot,)+) = self;
                ($($slot,)+ value)
            }
        }
    };
}

impl_append!(A);
impl_append!(A, B);
impl_append!(A, B, C);
impl_append!(A, B, C, D);
impl_append!(A, B, C, D, F);
impl_append!(A, B, C, D, F, G);
impl_append!(A, B, C, D, F, G, H);
impl_append!(A, B, C, D, F, G, H, I);
impl_append!(A, B, C, D, F, G, H, I, J);
impl_append!(A, B, C, D, F, G, H, I, J, K);
impl_append!(A, B, C, D, F, G, H, I, J, K, L);

pub trait First {
    type Head;

    fn first(self) -> Self::Head;
}

macro_rules! impl_first {
    ($head:ident $(, $rest:ident)*) => {
        impl<$head $(, $rest)*> First for ($head, $($rest,)*) {
            type Head = $head;

            fn first(self) -> $head {
                self.0
            }
        }
    };
}

impl_first!(A);
impl_first!(A, B);
impl_first!(A, B, C);
impl_first!(A, B, C, D);
impl_first!(A, B, C, D, F);
impl_first!(A, B, C, D, F, G);
impl_first!(A, B, C, D, F, G, H);
impl_first!(A, B, C, D, F, G, H, I);
impl_first!(A, B, C, D, F, G, H, I, J);
impl_first!(A, B, C, D, F, G, H, I, J, K);
impl_first!(A, B, C, D, F, G, H, I, J, K, L);
impl_first!(A, B, C, D, F, G, H, I, J, K, L, M);

impl<E: 'static, R: First + 'static> Rule<E, R>
where
    R::Head: 'static,
{
    /// Keep only the first slot of a tuple result.
    pub fn first(self) -> Rule<E, R::Head> {
        self.map(First::first)
    }
}
