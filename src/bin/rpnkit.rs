use clap::{Parser, Subcommand};
use log::info;

use rpnkit::{efmt, Expr, Formula};

#[derive(Debug, Parser)]
#[command(author, version, about = "Check, evaluate and rewrite postfix propositional formulae")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Display formulae in infix notation.
    #[clap(long, global = true)]
    infix: bool,

    /// Display formulae in infix notation, with operators spelled out.
    #[clap(long, global = true)]
    words: bool,

    /// Increase the log level (repeat for more details).
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that a formula is well-formed and report its properties.
    Check { formula: String },

    /// Evaluate a formula without variables.
    Eval { formula: String },

    /// Print the truth table of a variable formula.
    Table { formula: String },

    /// Rewrite a formula in negation normal form.
    Nnf { formula: String },

    /// Rewrite a formula in conjunctive normal form.
    Cnf { formula: String },

    /// Test if a formula is satisfiable.
    Sat { formula: String },

    /// Evaluate a formula over sets of integers (one comma-separated set per variable).
    Sets {
        formula: String,

        #[arg(value_name = "SET", value_parser = parse_set, allow_hyphen_values = true)]
        sets: Vec<IntSet>,
    },

    /// List all subsets of a set of integers.
    Powerset {
        #[arg(value_name = "INT", allow_negative_numbers = true)]
        elements: Vec<i32>,
    },
}

#[derive(Debug, Clone)]
struct IntSet(Vec<i32>);

fn parse_set(s: &str) -> Result<IntSet, std::num::ParseIntError> {
    let elements = s
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<i32>, _>>()?;
    Ok(IntSet(elements))
}

impl Cli {
    fn level(&self) -> simplelog::LevelFilter {
        match self.verbose {
            0 => simplelog::LevelFilter::Warn,
            1 => simplelog::LevelFilter::Info,
            2 => simplelog::LevelFilter::Debug,
            _ => simplelog::LevelFilter::Trace,
        }
    }

    fn show(&self, formula: &Formula) -> color_eyre::Result<String> {
        let cfg = match (self.words, self.infix) {
            (true, _) => &efmt::WORDS_FMT_CFG,
            (false, true) => &efmt::DEFAULT_FMT_CFG,
            (false, false) => return Ok(formula.to_string()),
        };
        let expr = Expr::try_from(formula)?;
        Ok(expr.infix(cfg).to_string())
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.level(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    info!("args = {:?}", args);

    match &args.command {
        Command::Check { formula } => {
            let formula: Formula = formula.parse()?;
            println!("valid: {}", args.show(&formula)?);
            println!("variables: {}", formula.variables());
            println!("explicit: {}", formula.is_explicit());
            println!("variable formula: {}", formula.is_variable_formula());
            println!("nnf: {}", rpnkit::is_nnf(&formula.to_string()));
            println!("cnf: {}", rpnkit::is_cnf(&formula.to_string()));
        }
        Command::Eval { formula } => {
            println!("{}", rpnkit::eval_formula(formula)? as u8);
        }
        Command::Table { formula } => {
            rpnkit::print_truth_table(formula)?;
        }
        Command::Nnf { formula } => {
            let nnf = formula.parse::<Formula>()?.negation_normal_form()?;
            println!("{}", args.show(&nnf)?);
        }
        Command::Cnf { formula } => {
            let cnf = formula.parse::<Formula>()?.conjunctive_normal_form()?;
            println!("{}", args.show(&cnf)?);
        }
        Command::Sat { formula } => {
            println!("{}", rpnkit::sat(formula)?);
        }
        Command::Sets { formula, sets } => {
            let sets: Vec<Vec<i32>> = sets.iter().map(|s| s.0.clone()).collect();
            println!("{:?}", rpnkit::eval_set(formula, &sets)?);
        }
        Command::Powerset { elements } => {
            for subset in rpnkit::powerset(elements) {
                println!("{:?}", subset);
            }
        }
    }

    Ok(())
}
