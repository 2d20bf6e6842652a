use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Plus,
    Minus,
    Multiply,
    Divide,
    Remainder,
    BitOr,
    BitAnd,
    BitXor,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 8] = [
        BinaryOp::Plus,
        BinaryOp::Minus,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Remainder,
        BinaryOp::BitOr,
        BinaryOp::BitAnd,
        BinaryOp::BitXor,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            BinaryOp::Plus => "plus",
            BinaryOp::Minus => "minus",
            BinaryOp::Multiply => "multiply",
            BinaryOp::Divide => "divide",
            BinaryOp::Remainder => "remainder",
            BinaryOp::BitOr => "bit_or",
            BinaryOp::BitAnd => "bit_and",
            BinaryOp::BitXor => "bit_xor",
        }
    }

    pub const fn is_bitwise(self) -> bool {
        matches!(self, BinaryOp::BitOr | BinaryOp::BitAnd | BinaryOp::BitXor)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Equals,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
}

impl CompareOp {
    pub const ALL: [CompareOp; 5] = [
        CompareOp::Equals,
        CompareOp::Less,
        CompareOp::Greater,
        CompareOp::LessEquals,
        CompareOp::GreaterEquals,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            CompareOp::Equals => "equals",
            CompareOp::Less => "less",
            CompareOp::Greater => "greater",
            CompareOp::LessEquals => "less_equals",
            CompareOp::GreaterEquals => "greater_equals",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
