use itertools::Either;

use super::digits::Wide;

/// the native integers a [`BigInt`](crate::BigInt) can be built from and combined with
pub trait Primitive: Copy + Eq + Ord {
    type Pos: UNum;
    type Neg: INum;

    fn select_sign(self) -> Either<Self::Pos, Self::Neg>;
}
pub trait UNum: Primitive {
    fn widen(self) -> Wide;
}
pub trait INum: Primitive {
    fn is_negative(self) -> bool;
    fn abs(self) -> Wide;
}

macro_rules! implPrim {
    ($pos_type: tt, $neg_type: tt) => {
        impl Primitive for $pos_type {
            type Pos = $pos_type;
            type Neg = $neg_type;

            fn select_sign(self) -> Either<Self::Pos, Self::Neg> {
                Either::Left(self)
            }
        }
        impl Primitive for $neg_type {
            type Pos = $pos_type;
            type Neg = $neg_type;

            fn select_sign(self) -> Either<Self::Pos, Self::Neg> {
                Either::Right(self)
            }
        }
        impl UNum for $pos_type {
            fn widen(self) -> Wide {
                Wide::from(self)
            }
        }
        impl INum for $neg_type {
            fn is_negative(self) -> bool {
                self < 0
            }
            fn abs(self) -> Wide {
                Wide::from(self.unsigned_abs())
            }
        }
    };
}

implPrim!(u32, i32);
implPrim!(u64, i64);

/// invokes `$mac!(args.., type)` for every supported native integer
macro_rules! for_each_primitive {
    ($mac:ident $(, $args:tt)*) => {
        $mac!($($args,)* u32);
        $mac!($($args,)* i32);
        $mac!($($args,)* u64);
        $mac!($($args,)* i64);
    };
}
pub(crate) use for_each_primitive;
