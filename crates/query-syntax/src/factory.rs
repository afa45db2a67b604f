use crate::{field::SearchMode, operator::Operator};
use model::core::{mapping::Mapping, value::Value};

/// Builds backend constraints on behalf of the compiler.
///
/// The compiler composes the returned constraints but never inspects them.
/// `and` and `or` are never called with an empty list.
pub trait FilterFactory {
    type Constraint;

    fn and(&self, constraints: Vec<Self::Constraint>) -> Self::Constraint;

    fn or(&self, constraints: Vec<Self::Constraint>) -> Self::Constraint;

    fn not(&self, constraint: Self::Constraint) -> Self::Constraint;

    /// Equality; `Value::Null` asks for a field without a value.
    fn eq(&self, field: &Mapping, value: Value) -> Self::Constraint;

    fn ne(&self, field: &Mapping, value: Value) -> Self::Constraint;

    fn gt(&self, field: &Mapping, value: Value) -> Self::Constraint;

    fn gte(&self, field: &Mapping, value: Value) -> Self::Constraint;

    fn lt(&self, field: &Mapping, value: Value) -> Self::Constraint;

    fn lte(&self, field: &Mapping, value: Value) -> Self::Constraint;

    /// Compares one default search word against a field.
    fn search_token(&self, field: &Mapping, mode: SearchMode, word: &str) -> Self::Constraint;

    /// Dispatches a parsed comparison to the matching factory method.
    fn compare(&self, field: &Mapping, operator: Operator, value: Value) -> Self::Constraint {
        match operator {
            Operator::Equal => self.eq(field, value),
            Operator::NotEqual => self.ne(field, value),
            Operator::GreaterThan => self.gt(field, value),
            Operator::GreaterOrEqual => self.gte(field, value),
            Operator::LessThan => self.lt(field, value),
            Operator::LessOrEqual => self.lte(field, value),
        }
    }
}
