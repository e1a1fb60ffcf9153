//! Subject contract
//!
//! A subject is any pure function of fixed arity. Case inputs are stored as a tuple whose shape matches the subject's
//! parameter list, so a table with the wrong arity or argument types does not compile.

/// A function under test, callable with a tuple of inputs.
pub trait Subject<I, O> {
    fn call(&self, inputs: &I) -> O;
}

impl<F, O> Subject<(), O> for F
where
    F: Fn() -> O,
{
    fn call(&self, _inputs: &()) -> O {
        self()
    }
}

macro_rules! impl_subject_for_arity {
    ($($ty:ident $var:ident),+) => {
        impl<F, O, $($ty),+> Subject<($($ty,)+), O> for F
        where
            F: Fn($($ty),+) -> O,
            $($ty: Clone),+
        {
            fn call(&self, inputs: &($($ty,)+)) -> O {
                let ($($var,)+) = inputs;
                self($($var.clone()),+)
            }
        }
    };
}

impl_subject_for_arity!(A a);
impl_subject_for_arity!(A a, B b);
impl_subject_for_arity!(A a, B b, C c);
impl_subject_for_arity!(A a, B b, C c, D d);
