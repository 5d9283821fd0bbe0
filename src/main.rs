use std::{env, fs::read_to_string, process, time::Instant};

use colored::Colorize;
use tacc::{
    errors::{
        errors::{Error, ErrorKind, ErrorTip},
        reporter::ErrorReporter,
    },
    lex,
    parser::parser::parse,
    semantic::walker::analyze,
    source_line,
    tac::generator::generate,
};

const USAGE: &str = "tacc <file> [--tokens] [--ast] [--symbols]";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("{} {}", "Usage:".bold(), USAGE);
        process::exit(2);
    }

    let file_path: &str = &args[1];
    let flags = &args[2..];
    let has_flag = |flag: &str| flags.iter().any(|f| f == flag);

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{} failed to read {}: {}", "error:".red().bold(), file_path, error);
            process::exit(2);
        }
    };

    let mut reporter = ErrorReporter::new();
    let start = Instant::now();

    let tokens = lex(&source, &mut reporter);
    println!("Tokenized in {:?}", start.elapsed());

    if has_flag("--tokens") {
        for token in &tokens {
            println!("  {}", token);
        }
    }

    let parse_start = Instant::now();
    let program = parse(tokens, &mut reporter);
    println!("Parsed in {:?}", parse_start.elapsed());

    if has_flag("--ast") {
        println!("{:#?}", program);
    }

    let analyze_start = Instant::now();
    let analysis = analyze(&program, &mut reporter);
    println!("Analyzed in {:?}", analyze_start.elapsed());

    if reporter.has_errors() {
        for error in reporter.diagnostics() {
            display_error(error, file_path, &source);
        }
        println!("\n{}", reporter.summary());
        process::exit(1);
    }

    if has_flag("--symbols") {
        println!("\n{}", "TABLA DE SÍMBOLOS".bold());
        print!("{}", analysis.symbols);
    }

    println!("\n{}", analysis.stats.report());
    println!("\n{}", analysis.stats);

    let generate_start = Instant::now();
    let generator = generate(&program);
    println!("Generated in {:?}", generate_start.elapsed());

    println!("\n{}", "CÓDIGO INTERMEDIO (Three Address Code)".bold());
    println!("{}", generator.render());

    println!("Total time: {:?}", start.elapsed());
}

fn display_error(error: &Error, file: &str, source: &str) {
    /*
        [SEMÁNTICO] Línea 3: Variable 'x' no ha sido declarada
        -> main.c:3
           |
         3 | x = 1;
           |
    */

    let header = match error.get_kind() {
        ErrorKind::Syntactic => format!("[{}]", error.get_kind()).yellow().bold(),
        ErrorKind::Semantic => format!("[{}]", error.get_kind()).red().bold(),
    };

    println!(
        "{} Línea {}: {}",
        header,
        error.get_line(),
        error.get_message()
    );
    println!("{} {}:{}", "->".blue(), file, error.get_line());

    let line = error.get_line().to_string();
    let padding = line.len() + 2;

    if let Some(text) = source_line(source, error.get_line()) {
        println!("{:>padding$}", "|".blue());
        println!("{} {} {}", line.blue(), "|".blue(), text.trim());
        println!("{:>padding$}", "|".blue());
    }

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        println!("{} {}", "tip:".green(), tip);
    }
}
