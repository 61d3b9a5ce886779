use crate::common::Index;
use crate::term::basic::{RcSubstitution, RcTerm, Substitution, Term};
use nameless_support::loc::Location;

/// The term a substitution maps a variable index to.
pub fn resolve(subst: &Substitution, index: Index) -> RcTerm {
    match subst {
        Substitution::Shift(amount) => {
            Term::variable_rc(index.raise(*amount), Location::Unknown)
        }
        Substitution::Extend(term, rest) => {
            if index.to_usize() == 0 {
                term.clone()
            } else {
                resolve(rest, Index::new(index.to_usize() - 1))
            }
        }
        Substitution::Lift(inner) => {
            if index.to_usize() == 0 {
                Term::variable_rc(Index::new(0), Location::Unknown)
            } else {
                let resolved = resolve(inner, Index::new(index.to_usize() - 1));
                Term::suspension_rc(Substitution::shift_rc(1), resolved, Location::Unknown)
            }
        }
    }
}

/// Apply a substitution to the head of a term.
///
/// Only the outermost constructor is rewritten; children are re-wrapped in
/// suspensions, so their share of the work happens when (and if) they are
/// inspected. Forcing never mutates its input.
pub fn force(subst: &RcSubstitution, term: &Term) -> RcTerm {
    match term {
        Term::Variable(var) => resolve(subst, var.index),
        Term::Application(app) => Term::application_rc(
            Term::suspension_rc(
                subst.clone(),
                app.function.clone(),
                app.function.location().clone(),
            ),
            Term::suspension_rc(
                subst.clone(),
                app.argument.clone(),
                app.argument.location().clone(),
            ),
            app.location.clone(),
        ),
        Term::Abstraction(abs) => Term::abstraction_rc(
            abs.hint.clone(),
            Term::suspension_rc(
                Substitution::lift_rc(subst.clone()),
                abs.body.clone(),
                abs.body.location().clone(),
            ),
            abs.location.clone(),
        ),
        Term::Suspension(susp) => Term::suspension_rc(
            subst.clone(),
            force(&susp.substitution, &susp.body),
            susp.location.clone(),
        ),
    }
}

/// Force suspensions until the head of the term is not a suspension.
pub fn expose(term: &RcTerm) -> RcTerm {
    let mut current = term.clone();
    loop {
        let next = match &*current {
            Term::Suspension(susp) => force(&susp.substitution, &susp.body),
            _ => return current,
        };
        current = next;
    }
}

/// Whether the variable `index` occurs free in `term`.
pub fn occurs_free(index: Index, term: &Term) -> bool {
    match term {
        Term::Variable(var) => var.index == index,
        Term::Application(app) => {
            occurs_free(index, &app.function) || occurs_free(index, &app.argument)
        }
        Term::Abstraction(abs) => occurs_free(index.raise(1), &abs.body),
        Term::Suspension(susp) => {
            let forced = force(&susp.substitution, &susp.body);
            occurs_free(index, &forced)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(index: usize) -> RcTerm {
        Term::variable_rc(Index::new(index), Location::Unknown)
    }

    #[test]
    fn test_resolve_shift() {
        let subst = Substitution::Shift(2);
        assert_eq!(resolve(&subst, Index::new(1)), var(3));
    }

    #[test]
    fn test_resolve_extend() {
        let subst = Substitution::Extend(var(9), Substitution::shift_rc(0));
        assert_eq!(resolve(&subst, Index::new(0)), var(9));
        assert_eq!(resolve(&subst, Index::new(2)), var(1));
    }

    #[test]
    fn test_expose_variable_replacement() {
        let subst = Substitution::extend_rc(var(5), Substitution::shift_rc(0));
        let term = Term::suspension_rc(subst, var(0), Location::Unknown);
        assert_eq!(expose(&term), var(5));
    }

    #[test]
    fn test_expose_is_identity_without_suspensions() {
        let term = Term::application_rc(var(0), var(1), Location::Unknown);
        assert_eq!(expose(&term), term);
    }

    #[test]
    fn test_force_pushes_under_binder() {
        // [0 ↦ $5](λ. $0 $1) exposes to λ. $0 $5 once the body is forced.
        let subst = Substitution::extend_rc(var(5), Substitution::shift_rc(0));
        let lam = Term::abstraction_rc(
            "x",
            Term::application_rc(var(0), var(1), Location::Unknown),
            Location::Unknown,
        );
        let term = Term::suspension_rc(subst, lam, Location::Unknown);

        let head = expose(&term);
        let Term::Abstraction(abs) = &*head else {
            panic!("expected an abstraction head");
        };
        let body = expose(&abs.body);
        let Term::Application(app) = &*body else {
            panic!("expected an application body");
        };
        assert_eq!(expose(&app.function), var(0));
        // $1 pointed at the replaced variable; under one binder the
        // replacement comes back shifted.
        assert_eq!(expose(&app.argument), var(6));
    }

    #[test]
    fn test_occurs_free() {
        let body = Term::application_rc(var(0), var(2), Location::Unknown);
        assert!(occurs_free(Index::new(0), &body));
        assert!(!occurs_free(Index::new(1), &body));
        assert!(occurs_free(Index::new(2), &body));

        // Under a binder the index shifts by one.
        let lam = Term::abstraction(
            "x",
            Term::variable_rc(Index::new(1), Location::Unknown),
            Location::Unknown,
        );
        assert!(occurs_free(Index::new(0), &lam));
        assert!(!occurs_free(Index::new(1), &lam));
    }

    #[test]
    fn test_occurs_free_through_suspension() {
        // [0 ↦ $3]$0 contains $3 free, not $0.
        let subst = Substitution::extend_rc(var(3), Substitution::shift_rc(0));
        let term = Term::suspension(subst, var(0), Location::Unknown);
        assert!(occurs_free(Index::new(3), &term));
        assert!(!occurs_free(Index::new(0), &term));
    }
}
