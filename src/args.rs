use std::collections::HashMap;
use std::env;
use std::fmt::Display;
use std::ops::Deref;
use std::rc::Rc;
use std::str::FromStr;
use clap::{ArgMatches, Error, ErrorKind};
use yaml_rust::Yaml;

#[derive(Debug)]
pub struct Args<'a, 'y> {
    args: &'a ArgMatches<'y>,
    yaml: &'y Yaml,
    vars: Rc<HashMap<String, String>>,
}

impl<'a, 'y> Args<'a, 'y> {
    pub fn new(args: &'a ArgMatches<'y>, yaml: &'y Yaml) -> Self {
        let vars = Self::vars(yaml).unwrap_or_default();
        Self { args, yaml, vars }
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.args.is_present(name) || self.is_set(name)
    }

    pub fn subcommand(&self) -> Option<(&str, Args<'a, 'y>)> {
        match self.args.subcommand() {
            (name, Some(args)) => self.subargs(name, args),
            _                  => None,
        }
    }

    pub fn arg<T: FromStr>(&self, name: &str) -> Result<T, Error> where T::Err: Display {
        self.opt(name)?.ok_or_else(|| {
            let msg = format!("missing value for {}", name);
            Error::with_description(&msg, ErrorKind::EmptyValue)
        })
    }

    pub fn opt<T: FromStr>(&self, name: &str) -> Result<Option<T>, Error> where T::Err: Display {
        self.value_of(name).map(T::from_str).transpose().map_err(|e| {
            let msg = format!("invalid value for {}: {}", name, e);
            Error::with_description(&msg, ErrorKind::InvalidValue)
        })
    }

    fn subargs<'n>(&self, name: &'n str, args: &'a ArgMatches<'y>) -> Option<(&'n str, Self)> {
        let cmds = self.yaml["subcommands"].as_vec()?;
        let yaml = cmds.iter().flat_map(|yaml| {
            match &yaml[name] {
                yaml @ Yaml::Hash(_) => Some(yaml),
                _                    => None,
            }
        }).next()?;
        let vars = Rc::clone(&self.vars);
        Some((name, Self { args, yaml, vars }))
    }

    fn is_set(&self, name: &str) -> bool {
        self.vars.get(name).map(|value| {
            value == "" || value.eq_ignore_ascii_case("true")
        }).unwrap_or(false)
    }

    fn vars(yaml: &Yaml) -> Option<Rc<HashMap<String, String>>> {
        let mut vars = HashMap::new();

        Self::scan(yaml, &mut vars);

        for cmd in yaml["subcommands"].as_vec()? {
            let (_, cmd) = cmd.as_hash()?.into_iter().next()?;
            Self::scan(cmd, &mut vars);
        }

        Some(Rc::new(vars))
    }

    fn scan(yaml: &Yaml, vars: &mut HashMap<String, String>) -> Option<()> {
        for arg in yaml["args"].as_vec()? {
            let (name, args) = arg.as_hash()?.into_iter().next()?;
            if let Some(var) = args["env"].as_str() {
                if let Some(value) = env::var_os(var) {
                    let name  = name.as_str()?.to_owned();
                    let value = value.to_string_lossy().into_owned();
                    vars.insert(name, value);
                }
            }
        }
        Some(())
    }
}

impl<'a, 'y> Deref for Args<'a, 'y> {
    type Target = ArgMatches<'y>;

    fn deref(&self) -> &Self::Target {
        &self.args
    }
}

#[cfg(test)]
mod test {
    use std::env;
    use clap::App;
    use yaml_rust::YamlLoader;
    use super::Args;

    const YAML: &str = "
name: test
args:
    - quiet:
        long: quiet
        env: TEST_ARGS_QUIET
";

    #[test]
    fn env_fallback() {
        let docs = YamlLoader::load_from_str(YAML).unwrap();
        let yaml = &docs[0];

        let matches = App::from_yaml(yaml).get_matches_from(vec!["test"]);

        env::remove_var("TEST_ARGS_QUIET");
        assert!(!Args::new(&matches, yaml).is_present("quiet"));

        env::set_var("TEST_ARGS_QUIET", "true");
        assert!(Args::new(&matches, yaml).is_present("quiet"));
    }
}
