use super::{ErrorKernel, Tap};

const fn tap(dx: isize, dy: isize, weight: u32) -> Tap {
    Tap { dx, dy, weight }
}

pub const FLOYD_STEINBERG: ErrorKernel = ErrorKernel {
    divisor: 16,
    taps: &[tap(1, 0, 7), tap(-1, 1, 3), tap(0, 1, 5), tap(1, 1, 1)],
};

// 6/8 of the error is propagated, the rest is dropped on purpose
pub const ATKINSON: ErrorKernel = ErrorKernel {
    divisor: 8,
    taps: &[
        tap(1, 0, 1),
        tap(2, 0, 1),
        tap(-1, 1, 1),
        tap(0, 1, 1),
        tap(1, 1, 1),
        tap(0, 2, 1),
    ],
};

pub const STUCKI: ErrorKernel = ErrorKernel {
    divisor: 42,
    taps: &[
        tap(1, 0, 8),
        tap(2, 0, 4),
        tap(-2, 1, 2),
        tap(-1, 1, 4),
        tap(0, 1, 8),
        tap(1, 1, 4),
        tap(2, 1, 2),
        tap(-2, 2, 1),
        tap(-1, 2, 2),
        tap(0, 2, 4),
        tap(1, 2, 2),
        tap(2, 2, 1),
    ],
};

pub const BURKES: ErrorKernel = ErrorKernel {
    divisor: 32,
    taps: &[
        tap(1, 0, 8),
        tap(2, 0, 4),
        tap(-2, 1, 2),
        tap(-1, 1, 4),
        tap(0, 1, 8),
        tap(1, 1, 4),
        tap(2, 1, 2),
    ],
};

pub const SIERRA: ErrorKernel = ErrorKernel {
    divisor: 32,
    taps: &[
        tap(1, 0, 5),
        tap(2, 0, 3),
        tap(-2, 1, 2),
        tap(-1, 1, 4),
        tap(0, 1, 5),
        tap(1, 1, 4),
        tap(2, 1, 2),
        tap(-1, 2, 2),
        tap(0, 2, 3),
        tap(1, 2, 2),
    ],
};

pub const JARVIS_JUDICE_NINKE: ErrorKernel = ErrorKernel {
    divisor: 48,
    taps: &[
        tap(1, 0, 7),
        tap(2, 0, 5),
        tap(-2, 1, 3),
        tap(-1, 1, 5),
        tap(0, 1, 7),
        tap(1, 1, 5),
        tap(2, 1, 3),
        tap(-2, 2, 1),
        tap(-1, 2, 3),
        tap(0, 2, 5),
        tap(1, 2, 3),
        tap(2, 2, 1),
    ],
};
