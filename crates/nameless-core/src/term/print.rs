use elegance::{Io, Printer, Render};
use thiserror::Error;

use crate::common::Index;
use crate::context::{Context, PLACEHOLDER};
use crate::term::basic::{Abstraction, Application, Suspension, Term, Variable};
use crate::term::force::{expose, force, occurs_free};

const INDENT: isize = 2;
const COLUMNS: usize = 80;

/// Printing stops descending into a term once this many groups are open.
/// Advisory only: output is truncated, never reported as an error.
const MAX_GROUPS: usize = 512;

// Nesting levels. A subterm is parenthesized exactly when its own level
// exceeds the maximum its parent allows for that position.
const ATOM_LEVEL: usize = 0;
const APP_LEVEL: usize = 1;
const LAMBDA_LEVEL: usize = 3;
const UNBOUNDED: Option<usize> = None;

/// A failure while rendering a term.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrintError<E> {
    /// A variable index with no matching context entry: the context the
    /// caller supplied was too short for the term.
    #[error("variable {index} is not bound in a context of depth {depth}")]
    UnboundVariable { index: usize, depth: usize },
    #[error(transparent)]
    Render(#[from] E),
}

/// Printer state threaded through a single render.
#[derive(Clone, Copy)]
struct State {
    /// The highest level printable without parentheses; `None` is
    /// unbounded.
    max_level: Option<usize>,
    /// The number of enclosing groups, for the overflow guard.
    groups: usize,
}

impl State {
    fn new() -> State {
        State {
            max_level: UNBOUNDED,
            groups: 0,
        }
    }

    fn with_max_level(self, max_level: Option<usize>) -> State {
        State { max_level, ..self }
    }

    fn enter_group(self) -> State {
        State {
            groups: self.groups + 1,
            ..self
        }
    }
}

/// Run `f` inside a consistent group. The group closes no matter how `f`
/// exits; non-render failures are parked and re-raised once it has.
fn group<R, F>(p: &mut Printer<R>, indent: isize, f: F) -> Result<(), PrintError<R::Error>>
where
    R: Render,
    F: FnOnce(&mut Printer<R>) -> Result<(), PrintError<R::Error>>,
{
    let mut pending = None;
    p.cgroup(indent, |p| match f(p) {
        Ok(()) => Ok(()),
        Err(PrintError::Render(err)) => Err(err),
        Err(err) => {
            pending = Some(err);
            Ok(())
        }
    })?;
    match pending {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Print through `f` at nesting level `level`, wrapping the output in
/// parentheses when the surrounding maximum does not admit it. A group is
/// opened either way, and both it and the parentheses stay balanced on
/// every exit path.
fn with_level<R, F>(
    st: State,
    p: &mut Printer<R>,
    level: usize,
    f: F,
) -> Result<(), PrintError<R::Error>>
where
    R: Render,
    F: FnOnce(State, &mut Printer<R>) -> Result<(), PrintError<R::Error>>,
{
    let parenthesized = match st.max_level {
        Some(max) => level > max,
        None => false,
    };
    let st = st.enter_group();
    if parenthesized {
        group(p, INDENT, |p| {
            p.text("(")?;
            f(st.with_max_level(UNBOUNDED), p)?;
            p.text(")")?;
            Ok(())
        })
    } else {
        group(p, 0, |p| f(st, p))
    }
}

/// Print `items` separated by `separator` followed by a break hint.
/// An empty slice prints nothing; a single item prints bare.
pub fn print_sequence<R, T, F>(
    p: &mut Printer<R>,
    separator: &str,
    items: &[T],
    mut item: F,
) -> Result<(), R::Error>
where
    R: Render,
    F: FnMut(&mut Printer<R>, &T) -> Result<(), R::Error>,
{
    for (i, x) in items.iter().enumerate() {
        if i > 0 {
            p.text_owned(separator)?;
            p.space()?;
        }
        item(p, x)?;
    }
    Ok(())
}

/// Print a bare identifier.
pub fn print_identifier<R: Render>(p: &mut Printer<R>, name: &str) -> Result<(), R::Error> {
    p.text_owned(name)
}

impl Term {
    fn print<R: Render>(
        &self,
        st: State,
        ctx: &mut Context,
        p: &mut Printer<R>,
    ) -> Result<(), PrintError<R::Error>> {
        if st.groups >= MAX_GROUPS {
            // Too deep to be worth emitting; drop the subtree.
            return Ok(());
        }
        match self {
            Term::Variable(var) => var.print(st, ctx, p),
            Term::Application(app) => app.print(st, ctx, p),
            Term::Abstraction(abs) => abs.print(st, ctx, p),
            Term::Suspension(susp) => susp.print(st, ctx, p),
        }
    }
}

impl Variable {
    fn print<R: Render>(
        &self,
        _st: State,
        ctx: &mut Context,
        p: &mut Printer<R>,
    ) -> Result<(), PrintError<R::Error>> {
        let Some(name) = ctx.lookup(self.index) else {
            return Err(PrintError::UnboundVariable {
                index: self.index.to_usize(),
                depth: ctx.depth(),
            });
        };
        p.text_owned(name)?;
        Ok(())
    }
}

impl Application {
    fn print<R: Render>(
        &self,
        st: State,
        ctx: &mut Context,
        p: &mut Printer<R>,
    ) -> Result<(), PrintError<R::Error>> {
        with_level(st, p, APP_LEVEL, |st, p| {
            // The left operand may itself be an application; the right may
            // not, which keeps chains left-associated on the page.
            self.function
                .print(st.with_max_level(Some(APP_LEVEL)), ctx, p)?;
            p.space()?;
            self.argument
                .print(st.with_max_level(Some(ATOM_LEVEL)), ctx, p)
        })
    }
}

impl Abstraction {
    fn print<R: Render>(
        &self,
        st: State,
        ctx: &mut Context,
        p: &mut Printer<R>,
    ) -> Result<(), PrintError<R::Error>> {
        // Walk the whole run of binders, forcing suspensions between them.
        let mut hints = vec![self.hint.clone()];
        let mut body = expose(&self.body);
        loop {
            let next = match &*body {
                Term::Abstraction(abs) => {
                    hints.push(abs.hint.clone());
                    expose(&abs.body)
                }
                _ => break,
            };
            body = next;
        }

        // Choose display names innermost first, so every freshness check
        // sees the names bound closer to the body. Binders whose variable
        // never occurs are shown as the placeholder.
        let count = hints.len();
        let mut chosen = vec![String::new(); count];
        for (depth, hint) in hints.iter().rev().enumerate() {
            let slot = count - 1 - depth;
            chosen[slot] = if occurs_free(Index::new(depth), &body) {
                ctx.freshen(hint, &chosen[slot + 1..])
            } else {
                PLACEHOLDER.to_string()
            };
        }

        with_level(st, p, LAMBDA_LEVEL, |st, p| {
            p.text("λ")?;
            print_sequence(p, "", &chosen, |p, name| print_identifier(p, name))?;
            p.text(".")?;
            p.space()?;
            for name in &chosen {
                ctx.push(name.clone());
            }
            let result = body.print(st.with_max_level(UNBOUNDED), ctx, p);
            ctx.truncate(ctx.depth() - count);
            result
        })
    }
}

impl Suspension {
    fn print<R: Render>(
        &self,
        st: State,
        ctx: &mut Context,
        p: &mut Printer<R>,
    ) -> Result<(), PrintError<R::Error>> {
        let forced = force(&self.substitution, &self.body);
        forced.print(st, ctx, p)
    }
}

/// Render a term under a naming context.
pub fn print_term<R: Render>(
    p: &mut Printer<R>,
    ctx: &Context,
    term: &Term,
) -> Result<(), PrintError<R::Error>> {
    let mut names = ctx.clone();
    term.print(State::new(), &mut names, p)
}

/// Render a term under a naming context into a string.
pub fn print_term_to_string(
    ctx: &Context,
    term: &Term,
) -> Result<String, PrintError<<String as Render>::Error>> {
    let mut p = Printer::new(String::new(), COLUMNS);
    print_term(&mut p, ctx, term)?;
    Ok(p.finish().unwrap_or_default())
}

/// Render a term to stdout.
pub fn dump_term(ctx: &Context, term: &Term) {
    let mut p = Printer::new(Io(std::io::stdout()), COLUMNS);
    let _ = print_term(&mut p, ctx, term);
    let _ = p.hard_break();
    let _ = p.finish();
}
