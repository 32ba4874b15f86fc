//! Named bundles returned by algorithms that advance more than one cursor.

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct InOut<I, O> {
    pub input: I,
    pub output: O,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct InIn<I1, I2> {
    pub in1: I1,
    pub in2: I2,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct InInOut<I1, I2, O> {
    pub in1: I1,
    pub in2: I2,
    pub output: O,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct InOutOut<I, O1, O2> {
    pub input: I,
    pub out1: O1,
    pub out2: O2,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct InFn<I, F> {
    pub input: I,
    pub function: F,
}

impl<I, O> InOut<I, O> {
    pub fn new(input: I, output: O) -> Self { Self { input, output } }
}
impl<I1, I2> InIn<I1, I2> {
    pub fn new(in1: I1, in2: I2) -> Self { Self { in1, in2 } }
}
impl<I1, I2, O> InInOut<I1, I2, O> {
    pub fn new(in1: I1, in2: I2, output: O) -> Self {
        Self { in1, in2, output }
    }
}
impl<I, O1, O2> InOutOut<I, O1, O2> {
    pub fn new(input: I, out1: O1, out2: O2) -> Self {
        Self { input, out1, out2 }
    }
}
impl<T> MinMax<T> {
    pub fn new(min: T, max: T) -> Self { Self { min, max } }
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> MinMax<U> {
        MinMax { min: f(self.min), max: f(self.max) }
    }
}
impl<I, F> InFn<I, F> {
    pub fn new(input: I, function: F) -> Self { Self { input, function } }
}

#[test]
fn sanity_check() {
    let r = InOut::new(1, "a");
    assert_eq!((r.input, r.output), (1, "a"));
    assert_eq!(InIn::new(1, 2), InIn { in1: 1, in2: 2 });
    assert_eq!(MinMax::new(2, 5).map(|x| x * 10), MinMax::new(20, 50));
    assert_eq!(InInOut::<u8, u8, u8>::default(), InInOut::new(0, 0, 0));
}
