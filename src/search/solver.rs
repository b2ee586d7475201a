use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::algebra::{BINARY_OPS, BinaryOp, Expr, UNARY_OPS};
use crate::search::cache::PruningCache;

/// Memoizing interval search over one fixed operand list.
///
/// The span memo replays a sub-interval's full expression set when the same
/// span recurs inside different ancestor intervals; it is separate from the
/// value-keyed pruning cache, which the solver routes every operator
/// application through.
pub struct IntervalSolver {
    operands: Vec<Expr>,
    cache: PruningCache,
    memo: HashMap<(usize, usize), Vec<Expr>>,
}

impl IntervalSolver {
    /// Build a solver with a fresh pruning cache pre-seeded with the
    /// literal operands.
    pub fn new(operands: Vec<Expr>) -> Self {
        let mut cache = PruningCache::new();
        for operand in &operands {
            cache.register_number(operand);
        }
        Self {
            operands,
            cache,
            memo: HashMap::new(),
        }
    }

    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    /// Close `exprs[from..]` under the unary operators, recursively over
    /// newly produced results, so chains like `sqrt(x!)` are reached.
    /// Termination comes from the algebra and cache prunes.
    fn close_under_unary(&mut self, exprs: &mut Vec<Expr>, from: usize) {
        let mut index = from;
        while index < exprs.len() {
            for op in UNARY_OPS {
                if let Some(expr) = self.cache.apply_unary(op, &exprs[index]) {
                    exprs.push(expr);
                }
            }
            index += 1;
        }
    }

    /// Apply one binary operator to a result pair and push every success,
    /// unary-closed, into `out`.
    fn combine_into(&mut self, op: BinaryOp, left: &Expr, right: &Expr, out: &mut VecDeque<Expr>) {
        if let Some(expr) = self.cache.apply_binary(op, left, right) {
            let mut closed = vec![expr];
            self.close_under_unary(&mut closed, 0);
            out.extend(closed);
        }
    }

    /// Every canonical expression over the operand interval `[start, end)`.
    fn solve_span(&mut self, start: usize, end: usize) -> Vec<Expr> {
        if let Some(known) = self.memo.get(&(start, end)) {
            return known.clone();
        }

        let mut results = Vec::new();
        if end - start == 1 {
            results.push(self.operands[start].clone());
            self.close_under_unary(&mut results, 0);
        } else {
            for split in start + 1..end {
                let lefts = self.solve_span(start, split);
                let rights = self.solve_span(split, end);
                for left in &lefts {
                    for right in &rights {
                        for op in BINARY_OPS {
                            if let Some(expr) = self.cache.apply_binary(op, left, right) {
                                let from = results.len();
                                results.push(expr);
                                self.close_under_unary(&mut results, from);
                            }
                        }
                    }
                }
            }
        }

        debug!(
            "Span [{}, {}) solved with {} expressions",
            start,
            end,
            results.len()
        );
        self.memo.insert((start, end), results.clone());
        results
    }
}

/// Lazily streams every canonical expression covering the full operand
/// list.
///
/// Sub-intervals are solved eagerly through the solver's memo; the final
/// combine step advances a (split, left, right, operator) state machine one
/// application per refill, so the caller may stop consuming at any time
/// without materializing the remainder.
pub struct ExprStream {
    solver: IntervalSolver,
    state: Option<StreamState>,
    buffer: VecDeque<Expr>,
}

struct StreamState {
    split: usize,
    lefts: Vec<Expr>,
    rights: Vec<Expr>,
    left_index: usize,
    right_index: usize,
    op_index: usize,
}

impl StreamState {
    fn at_split(solver: &mut IntervalSolver, split: usize) -> Self {
        let count = solver.operand_count();
        Self {
            split,
            lefts: solver.solve_span(0, split),
            rights: solver.solve_span(split, count),
            left_index: 0,
            right_index: 0,
            op_index: 0,
        }
    }

    fn exhausted(&self) -> bool {
        self.left_index >= self.lefts.len() || self.rights.is_empty()
    }
}

impl ExprStream {
    pub fn new(operands: Vec<Expr>) -> Self {
        let count = operands.len();
        let mut solver = IntervalSolver::new(operands);
        let mut buffer = VecDeque::new();
        let mut state = None;
        if count == 1 {
            buffer.extend(solver.solve_span(0, 1));
        } else if count >= 2 {
            state = Some(StreamState::at_split(&mut solver, 1));
        }
        Self {
            solver,
            state,
            buffer,
        }
    }
}

impl Iterator for ExprStream {
    type Item = Expr;

    fn next(&mut self) -> Option<Expr> {
        loop {
            if let Some(expr) = self.buffer.pop_front() {
                return Some(expr);
            }
            let state = self.state.as_mut()?;
            if state.exhausted() {
                if state.split + 1 < self.solver.operand_count() {
                    *state = StreamState::at_split(&mut self.solver, state.split + 1);
                } else {
                    self.state = None;
                }
                continue;
            }

            let op = BINARY_OPS[state.op_index];
            let left = state.lefts[state.left_index].clone();
            let right = state.rights[state.right_index].clone();

            state.op_index += 1;
            if state.op_index == BINARY_OPS.len() {
                state.op_index = 0;
                state.right_index += 1;
                if state.right_index == state.rights.len() {
                    state.right_index = 0;
                    state.left_index += 1;
                }
            }

            self.solver.combine_into(op, &left, &right, &mut self.buffer);
        }
    }
}
