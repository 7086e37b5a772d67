use std::{env, fs, process};

use minipas::{lexer::lexer::tokenize, parser::parser::parse, render_diagnostic};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: minipas <source-file>");
        process::exit(2);
    }

    let source = match fs::read_to_string(&args[1]) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("failed to read {}: {}", args[1], error);
            process::exit(2);
        }
    };

    println!("Lexical Analysis:");
    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            println!("\tFailed.");
            println!("{}", render_diagnostic(&error));
            process::exit(1);
        }
    };
    for token in &tokens {
        println!("{}", token);
    }

    println!("\nSyntactic Analysis:");
    match parse(&tokens, Some(&source)) {
        Ok(()) => println!("\tSuccess!"),
        Err(error) => {
            println!("\tFailed.");
            println!("{}", render_diagnostic(&error));
            process::exit(1);
        }
    }
}
