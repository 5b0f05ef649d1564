#![allow(clippy::uninlined_format_args)]

use regexp_shared::{Error, MatchResult, RegExp, RegExpFactory};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "regexp-tool")]
struct Opt {
    /// The regular expression.
    pattern: String,

    /// The flags of the regular expression.
    #[structopt(long, short, default_value = "")]
    flags: String,

    /// Use the host-library adapter instead of the selected one.
    #[structopt(long)]
    stdlib: bool,

    /// Print the quoted form of the pattern and exit.
    #[structopt(long)]
    quote: bool,

    /// Replace matches in each input with this template.
    #[structopt(long, short, conflicts_with = "split")]
    replace: Option<String>,

    /// Split each input around matches.
    #[structopt(long, short)]
    split: bool,

    /// Maximum number of split pieces.
    #[structopt(long, requires = "split")]
    limit: Option<usize>,

    /// The input values to match against.
    #[structopt(conflicts_with_all = &["bench", "file"])]
    inputs: Vec<String>,

    /// Match against the contents of a specified file.
    #[structopt(long, conflicts_with_all = &["bench", "inputs"])]
    file: Option<PathBuf>,

    /// Benchmark the matches of the specified file.
    #[structopt(long, conflicts_with_all = &["file", "inputs"])]
    bench: Option<PathBuf>,
}

fn format_match(m: &MatchResult) -> String {
    let mut result = format!("\"{}\" ({}..{})", m.matched(), m.index(), m.end());
    if m.group_count() > 1 {
        result.push_str(", groups: [");
        for (i, group) in m.groups().enumerate().skip(1) {
            if i > 1 {
                result.push_str(", ");
            }
            match group {
                Some(text) => result.push_str(&format!("\"{}\"", text)),
                None => result.push_str("None"),
            }
        }
        result.push(']');
    }
    result
}

/// Walk every match of \p re over \p input using the cursor, printing the
/// first and the total count.
fn exec_re_on_string<R: RegExp>(re: &mut R, input: &str) -> Result<(), Error> {
    re.set_last_index(0);
    let first = re.exec(input)?;
    let Some(first) = first else {
        println!("No match");
        return Ok(());
    };
    let mut count = 1;
    if re.global() {
        if first.matched().is_empty() {
            re.set_last_index(first.end() + 1);
        }
        while let Some(m) = re.exec(input)? {
            count += 1;
            if m.matched().is_empty() {
                re.set_last_index(m.end() + 1);
            }
        }
    }
    println!("Match: {}, total: {}", format_match(&first), count);
    Ok(())
}

fn run_on_string<R: RegExp>(re: &mut R, args: &Opt, input: &str) -> Result<(), Error> {
    if let Some(ref template) = args.replace {
        println!("{}", re.replace(input, template)?);
    } else if args.split {
        let pieces = match args.limit {
            Some(limit) => re.split_with_limit(input, limit)?,
            None => re.split(input)?,
        };
        println!("{:?}", pieces.into_vec());
    } else {
        exec_re_on_string(re, input)?;
    }
    Ok(())
}

fn bench_re_on_path<R: RegExp>(re: &mut R, path: &Path) -> Result<(), Error> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            println!("{}: {}", err, path.display());
            return Ok(());
        }
    };
    let input = contents.as_str();
    let count_all = |re: &mut R| -> Result<usize, Error> {
        re.set_last_index(0);
        let mut count = 0;
        while let Some(m) = re.exec(input)? {
            count += 1;
            if !re.global() {
                break;
            }
            if m.matched().is_empty() {
                re.set_last_index(m.end() + 1);
            }
        }
        Ok(count)
    };
    // Warmup
    count_all(re)?;
    let start = Instant::now();
    for _ in 0..25 {
        count_all(re)?;
    }
    let duration = start.elapsed();
    println!("{} ms", duration.as_millis());
    Ok(())
}

fn run<F: RegExpFactory>(args: &Opt) -> Result<(), Error> {
    if args.quote {
        println!("{}", F::quote(&args.pattern));
        return Ok(());
    }
    let mut re = F::compile_with_flags(&args.pattern, &args.flags)?;
    if let Some(ref path) = args.file {
        match fs::read_to_string(path) {
            Ok(contents) => run_on_string(&mut re, args, contents.as_str())?,
            Err(err) => println!("{}: {}", err, path.display()),
        };
    } else if let Some(ref path) = args.bench {
        bench_re_on_path(&mut re, path)?;
    } else {
        for input in &args.inputs {
            run_on_string(&mut re, args, input)?;
        }
    }
    Ok(())
}

fn dispatch(args: &Opt) -> Result<(), Error> {
    if args.stdlib {
        run::<regexp_shared::stdlib::StdFactory>(args)
    } else {
        run::<regexp_shared::SelectedFactory>(args)
    }
}

fn main() -> Result<(), Error> {
    dispatch(&Opt::from_args())
}
