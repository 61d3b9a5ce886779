use crate::common::Index;
use nameless_support::loc::Location;
use std::rc::Rc;

pub type RcTerm = Rc<Term>;
pub type RcSubstitution = Rc<Substitution>;

/// A lambda term in de Bruijn form.
///
/// Binders carry only a display hint; variables are indices. Substitutions
/// are not applied eagerly: a `Suspension` keeps the substitution alongside
/// the untouched body until something needs to look at the head.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Clone)]
pub enum Term {
    Variable(Variable),
    Application(Application),
    Abstraction(Abstraction),
    Suspension(Suspension),
}

impl Term {
    pub fn variable(index: Index, location: Location) -> Term {
        Term::Variable(Variable::new(index, location))
    }

    pub fn variable_rc(index: Index, location: Location) -> RcTerm {
        Rc::new(Term::variable(index, location))
    }

    pub fn application(function: RcTerm, argument: RcTerm, location: Location) -> Term {
        Term::Application(Application::new(function, argument, location))
    }

    pub fn application_rc(function: RcTerm, argument: RcTerm, location: Location) -> RcTerm {
        Rc::new(Term::application(function, argument, location))
    }

    pub fn abstraction(hint: impl Into<String>, body: RcTerm, location: Location) -> Term {
        Term::Abstraction(Abstraction::new(hint, body, location))
    }

    pub fn abstraction_rc(hint: impl Into<String>, body: RcTerm, location: Location) -> RcTerm {
        Rc::new(Term::abstraction(hint, body, location))
    }

    pub fn suspension(
        substitution: RcSubstitution,
        body: RcTerm,
        location: Location,
    ) -> Term {
        Term::Suspension(Suspension::new(substitution, body, location))
    }

    pub fn suspension_rc(
        substitution: RcSubstitution,
        body: RcTerm,
        location: Location,
    ) -> RcTerm {
        Rc::new(Term::suspension(substitution, body, location))
    }

    /// The source location attached to this node.
    pub fn location(&self) -> &Location {
        match self {
            Term::Variable(var) => &var.location,
            Term::Application(app) => &app.location,
            Term::Abstraction(abs) => &abs.location,
            Term::Suspension(susp) => &susp.location,
        }
    }
}

#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Clone)]
pub struct Variable {
    pub index: Index,
    pub location: Location,
}

impl Variable {
    pub fn new(index: Index, location: Location) -> Variable {
        Variable { index, location }
    }
}

#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Clone)]
pub struct Application {
    pub function: RcTerm,
    pub argument: RcTerm,
    pub location: Location,
}

impl Application {
    pub fn new(function: RcTerm, argument: RcTerm, location: Location) -> Application {
        Application {
            function,
            argument,
            location,
        }
    }
}

#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Clone)]
pub struct Abstraction {
    /// The name the binder had before it was converted to indices. Only a
    /// hint: printing may rename it to stay unambiguous.
    pub hint: String,
    pub body: RcTerm,
    pub location: Location,
}

impl Abstraction {
    pub fn new(hint: impl Into<String>, body: RcTerm, location: Location) -> Abstraction {
        Abstraction {
            hint: hint.into(),
            body,
            location,
        }
    }
}

/// A substitution waiting to be applied to a body.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Clone)]
pub struct Suspension {
    pub substitution: RcSubstitution,
    pub body: RcTerm,
    pub location: Location,
}

impl Suspension {
    pub fn new(substitution: RcSubstitution, body: RcTerm, location: Location) -> Suspension {
        Suspension {
            substitution,
            body,
            location,
        }
    }
}

/// An explicit substitution, kept unapplied inside `Suspension` nodes.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Clone)]
pub enum Substitution {
    /// Add an amount to every free index.
    Shift(usize),
    /// Map index 0 to a term and the remaining indices to another
    /// substitution.
    Extend(RcTerm, RcSubstitution),
    /// A substitution pushed under one binder: index 0 is left alone, the
    /// rest go to the inner substitution and are shifted back up by one.
    Lift(RcSubstitution),
}

impl Substitution {
    pub fn shift_rc(amount: usize) -> RcSubstitution {
        Rc::new(Substitution::Shift(amount))
    }

    pub fn extend_rc(term: RcTerm, rest: RcSubstitution) -> RcSubstitution {
        Rc::new(Substitution::Extend(term, rest))
    }

    pub fn lift_rc(inner: RcSubstitution) -> RcSubstitution {
        Rc::new(Substitution::Lift(inner))
    }
}
