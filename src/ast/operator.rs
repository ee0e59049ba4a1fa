use std::fmt;

/// Tightest binding rank, shared by every unary operator.
const UNARY_PRECEDENCE: u8 = 13;

/// Whether operators of equal precedence group to the left or to the right.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a = b = c` is `a = (b = c)`.
    Right,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Numeric identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Minus,
    /// Logical NOT (`!x`).
    Not,
    /// Bitwise complement (`~x`).
    BitwiseNot,
    /// Increment (`++`), before it is bound to a variable.
    Increment,
    /// Decrement (`--`), before it is bound to a variable.
    Decrement,
}

/// The two operators that both read and write a variable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StepOperator {
    /// `++`
    Increment,
    /// `--`
    Decrement,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, shifts, comparisons, bitwise and
/// logical connectives, and the assignment family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Remainder (`%`)
    Remainder,
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Arithmetic right shift (`>>`)
    ShiftRight,
    /// Logical right shift (`>>>`)
    UnsignedShiftRight,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Type test (`typeof`)
    TypeOf,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Bitwise and (`&`)
    BitwiseAnd,
    /// Bitwise exclusive or (`^`)
    BitwiseXor,
    /// Bitwise or (`|`)
    BitwiseOr,
    /// Short-circuit and (`&&`)
    And,
    /// Short-circuit or (`||`)
    Or,
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubtractAssign,
    /// `*=`
    MultiplyAssign,
    /// `/=`
    DivideAssign,
    /// `%=`
    RemainderAssign,
    /// `&=`
    AndAssign,
    /// `|=`
    OrAssign,
    /// `^=`
    XorAssign,
    /// `<<=`
    ShiftLeftAssign,
    /// `>>=`
    ShiftRightAssign,
    /// `>>>=`
    UnsignedShiftRightAssign,
}

/// Either kind of operator, as it appears in a lexeme sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// A prefix operator with one operand.
    Unary(UnaryOperator),
    /// An infix operator with two operands.
    Binary(BinaryOperator),
}

impl UnaryOperator {
    /// Looks up a unary operator by its source symbol.
    ///
    /// `+` and `-` are returned as the unary sign operators; the caller decides
    /// from context whether the symbol is unary at all.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "+" => Self::Plus,
            "-" => Self::Minus,
            "!" => Self::Not,
            "~" => Self::BitwiseNot,
            "++" => Self::Increment,
            "--" => Self::Decrement,
            _ => return None,
        })
    }

    /// The step operator for `++` and `--`.
    #[must_use]
    pub const fn as_step(self) -> Option<StepOperator> {
        match self {
            Self::Increment => Some(StepOperator::Increment),
            Self::Decrement => Some(StepOperator::Decrement),
            Self::Plus | Self::Minus | Self::Not | Self::BitwiseNot => None,
        }
    }
}

impl BinaryOperator {
    /// Looks up a binary operator by its source symbol.
    ///
    /// # Example
    /// ```
    /// use sprig::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol(">>>="),
    ///            Some(BinaryOperator::UnsignedShiftRightAssign));
    /// assert_eq!(BinaryOperator::from_symbol("typeof"), Some(BinaryOperator::TypeOf));
    /// assert_eq!(BinaryOperator::from_symbol("++"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "*" => Self::Multiply,
            "/" => Self::Divide,
            "%" => Self::Remainder,
            "+" => Self::Add,
            "-" => Self::Subtract,
            "<<" => Self::ShiftLeft,
            ">>" => Self::ShiftRight,
            ">>>" => Self::UnsignedShiftRight,
            "<" => Self::Less,
            "<=" => Self::LessEqual,
            ">" => Self::Greater,
            ">=" => Self::GreaterEqual,
            "typeof" => Self::TypeOf,
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            "&" => Self::BitwiseAnd,
            "^" => Self::BitwiseXor,
            "|" => Self::BitwiseOr,
            "&&" => Self::And,
            "||" => Self::Or,
            "=" => Self::Assign,
            "+=" => Self::AddAssign,
            "-=" => Self::SubtractAssign,
            "*=" => Self::MultiplyAssign,
            "/=" => Self::DivideAssign,
            "%=" => Self::RemainderAssign,
            "&=" => Self::AndAssign,
            "|=" => Self::OrAssign,
            "^=" => Self::XorAssign,
            "<<=" => Self::ShiftLeftAssign,
            ">>=" => Self::ShiftRightAssign,
            ">>>=" => Self::UnsignedShiftRightAssign,
            _ => return None,
        })
    }

    /// Whether the operator writes its left operand, which must then be a
    /// variable.
    #[must_use]
    pub const fn is_assignment(self) -> bool {
        self.precedence() == 1
    }

    /// The arithmetic or bitwise operator a compound assignment applies.
    ///
    /// Returns `None` for plain `=` and for every non-assignment operator.
    #[must_use]
    pub const fn compound_base(self) -> Option<Self> {
        match self {
            Self::AddAssign => Some(Self::Add),
            Self::SubtractAssign => Some(Self::Subtract),
            Self::MultiplyAssign => Some(Self::Multiply),
            Self::DivideAssign => Some(Self::Divide),
            Self::RemainderAssign => Some(Self::Remainder),
            Self::AndAssign => Some(Self::BitwiseAnd),
            Self::OrAssign => Some(Self::BitwiseOr),
            Self::XorAssign => Some(Self::BitwiseXor),
            Self::ShiftLeftAssign => Some(Self::ShiftLeft),
            Self::ShiftRightAssign => Some(Self::ShiftRight),
            Self::UnsignedShiftRightAssign => Some(Self::UnsignedShiftRight),
            _ => None,
        }
    }

    /// Binding rank; larger binds tighter.
    ///
    /// Rank 2 belongs to the ternary `?:`, which never reaches the postfix
    /// builder as an operator.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Multiply | Self::Divide | Self::Remainder => 12,
            Self::Add | Self::Subtract => 11,
            Self::ShiftLeft | Self::ShiftRight | Self::UnsignedShiftRight => 10,
            Self::Less | Self::LessEqual | Self::Greater | Self::GreaterEqual | Self::TypeOf => 9,
            Self::Equal | Self::NotEqual => 8,
            Self::BitwiseAnd => 7,
            Self::BitwiseXor => 6,
            Self::BitwiseOr => 5,
            Self::And => 4,
            Self::Or => 3,
            Self::Assign
            | Self::AddAssign
            | Self::SubtractAssign
            | Self::MultiplyAssign
            | Self::DivideAssign
            | Self::RemainderAssign
            | Self::AndAssign
            | Self::OrAssign
            | Self::XorAssign
            | Self::ShiftLeftAssign
            | Self::ShiftRightAssign
            | Self::UnsignedShiftRightAssign => 1,
        }
    }
}

impl Operator {
    /// Binding rank; larger binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Unary(_) => UNARY_PRECEDENCE,
            Self::Binary(op) => op.precedence(),
        }
    }

    /// Assignment and unary operators group to the right, the rest to the left.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Unary(_) => Associativity::Right,
            Self::Binary(op) if op.is_assignment() => Associativity::Right,
            Self::Binary(_) => Associativity::Left,
        }
    }

    /// Whether `self` binds strictly looser than `other`.
    ///
    /// Two unary operators are never comparable, so this is `false` for any
    /// pair of them.
    ///
    /// # Example
    /// ```
    /// use sprig::ast::{BinaryOperator, Operator, UnaryOperator};
    ///
    /// let add = Operator::Binary(BinaryOperator::Add);
    /// let mul = Operator::Binary(BinaryOperator::Multiply);
    /// let neg = Operator::Unary(UnaryOperator::Minus);
    /// let not = Operator::Unary(UnaryOperator::Not);
    ///
    /// assert!(add.has_lower_precedence(mul));
    /// assert!(!mul.has_lower_precedence(add));
    /// assert!(mul.has_lower_precedence(neg));
    /// assert!(!neg.has_lower_precedence(not));
    /// ```
    #[must_use]
    pub const fn has_lower_precedence(self, other: Self) -> bool {
        if matches!((self, other), (Self::Unary(_), Self::Unary(_))) {
            return false;
        }
        self.precedence() < other.precedence()
    }

    /// Whether an operator on top of the shunting-yard stack must be moved to
    /// the output before `incoming` is pushed.
    ///
    /// A unary operator has no left operand, so it never pops anything.
    #[must_use]
    pub const fn should_pop(top: Self, incoming: Self) -> bool {
        if matches!(incoming, Self::Unary(_)) {
            return false;
        }
        incoming.has_lower_precedence(top)
        || (top.precedence() == incoming.precedence()
            && matches!(incoming.associativity(), Associativity::Left))
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Not => "!",
            Self::BitwiseNot => "~",
            Self::Increment => "++",
            Self::Decrement => "--",
        };
        f.write_str(symbol)
    }
}

impl fmt::Display for StepOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Increment => "++",
                        Self::Decrement => "--",
                    })
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::UnsignedShiftRight => ">>>",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::TypeOf => "typeof",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::BitwiseAnd => "&",
            Self::BitwiseXor => "^",
            Self::BitwiseOr => "|",
            Self::And => "&&",
            Self::Or => "||",
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubtractAssign => "-=",
            Self::MultiplyAssign => "*=",
            Self::DivideAssign => "/=",
            Self::RemainderAssign => "%=",
            Self::AndAssign => "&=",
            Self::OrAssign => "|=",
            Self::XorAssign => "^=",
            Self::ShiftLeftAssign => "<<=",
            Self::ShiftRightAssign => ">>=",
            Self::UnsignedShiftRightAssign => ">>>=",
        };
        f.write_str(symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unary(op) => op.fmt(f),
            Self::Binary(op) => op.fmt(f),
        }
    }
}
