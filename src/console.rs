use std::io::{BufRead, Write};

use clap::Parser;

use crate::{agent, prelude::*};

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct ConsoleOptions
{
    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,

    #[arg(short, long, default_value_t = 4)]
    /// default search depth in plies
    pub depth: u8,

    #[arg(short, long, default_value = "alphabeta")]
    /// default search algorithm (minimax or alphabeta)
    pub algorithm: Algorithm,

    #[arg(short, long)]
    /// the side the engine plays on its own (attacker or defender)
    pub engine: Option<Side>,
}

impl ConsoleOptions
{
    /// The search arguments used when a command doesn't give its own.
    pub fn search_args(&self) -> Result<SearchArgs>
    {
        let depth = Depth::new(self.depth);
        if !depth.valid()
        {
            return Err(Error::new(Kind::InvalidOption, format!("The deepest search is {} plies.", Depth::MAX)));
        }

        // The engine side searches with these, and a zero-ply search has no move to play.
        if let (Some(side), true) = (self.engine, depth.is_horizon())
        {
            let err_msg = format!("The engine plays the {} and needs a depth of at least {}.", side, Depth::PLY);
            return Err(Error::new(Kind::InvalidOption, err_msg));
        }

        Ok(SearchArgs {
            depth,
            algorithm: self.algorithm,
        })
    }
}

/// What the engine needs from whoever is on the other side of the table.
pub trait Interface
{
    /// Gets the next command, or None when there are no more.
    fn obtain_command(&mut self) -> Result<Option<String>>;

    /// Shows a position.
    fn render(&mut self, board: &Board) -> Result<()>;

    /// Reports a command that could not be carried out.
    fn report_invalid(&mut self, err: &Error) -> Result<()>;

    /// Reports any other line of output.
    fn report_line(&mut self, line: &str) -> Result<()>;

    /// Reports the end of the game.
    fn report_winner(&mut self, winner: Side) -> Result<()>;
}

/// A line-oriented interface over any reader and writer.
pub struct Console<R, W>
{
    input:  R,
    output: W,
}

impl Console<std::io::StdinLock<'static>, std::io::Stdout>
{
    /// A console on the process's standard streams.
    pub fn stdio() -> Self
    {
        Console::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W>
{
    pub fn new(input: R, output: W) -> Self
    {
        Console { input, output }
    }

    /// Gives back the writer, so callers can inspect what was written.
    pub fn into_output(self) -> W
    {
        self.output
    }
}

impl<R: BufRead, W: Write> Interface for Console<R, W>
{
    fn obtain_command(&mut self) -> Result<Option<String>>
    {
        let mut cmdstr = String::new();
        match self.input.read_line(&mut cmdstr)?
        {
            | 0 => Ok(None),
            | _ => Ok(Some(cmdstr)),
        }
    }

    fn render(&mut self, board: &Board) -> Result<()>
    {
        writeln!(self.output, "{}", board)?;
        Ok(())
    }

    fn report_invalid(&mut self, err: &Error) -> Result<()>
    {
        writeln!(self.output, "err\n{}", err)?;
        Ok(())
    }

    fn report_line(&mut self, line: &str) -> Result<()>
    {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    fn report_winner(&mut self, winner: Side) -> Result<()>
    {
        let how = match winner
        {
            | Side::Attacker => "the king is captured",
            | Side::Defender => "the king escapes",
        };
        writeln!(self.output, "{} wins: {}", winner, how)?;
        Ok(())
    }
}

/// Drives a game over an interface, one command at a time.
pub struct Server<I: Interface>
{
    interface: I,
    history:   Vec<Board>,
    defaults:  SearchArgs,
    engine:    Option<Side>,
}

impl<I: Interface> Server<I>
{
    /// Creates a new server at the initial position.
    pub fn new(options: &ConsoleOptions, interface: I) -> Result<Self>
    {
        Ok(Server {
            interface,
            history: vec![Board::new()],
            defaults: options.search_args()?,
            engine: options.engine,
        })
    }

    /// The position being played.
    pub fn board(&self) -> &Board
    {
        // The history is never emptied; undo stops at the first position.
        &self.history[self.history.len() - 1]
    }

    /// Gives back the interface.
    pub fn into_interface(self) -> I
    {
        self.interface
    }

    /// Runs commands until the interface runs dry or asks to quit.
    pub fn run(&mut self) -> Result<()>
    {
        self.show()?;
        self.engine_reply()?;

        while let Some(cmdstr) = self.interface.obtain_command()?
        {
            let args: Vec<&str> = cmdstr.split_whitespace().filter(|s| !s.is_empty()).collect();
            let cmd = *args.first().unwrap_or(&"");

            if matches!(cmd, "quit" | "exit")
            {
                log::info!("leaving on request");
                break;
            }

            let skip = args.len().min(1);
            self.apply(cmd, &args[skip ..])?;
        }

        Ok(())
    }
}

impl<I: Interface> Server<I>
{
    /// Matches the command to the server's functionality.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()>
    {
        let result = match cmd
        {
            | "" => Ok(()),
            | "auto" => self.auto(args),
            | "bestmove" => self.best_move(args),
            | "board" => self.show(),
            | "info" => self.info(),
            | "newgame" => self.new_game(),
            | "play" => self.play_move(args),
            | "undo" => self.undo(args),
            | "validmoves" => self.valid_moves(),
            | _ => Err(Error::new(Kind::UnrecognizedCommand, cmd.into())),
        };

        match result
        {
            | Ok(_) =>
            {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            }
            | Err(err) => match err.fatal()
            {
                | true =>
                {
                    let _ = self.interface.report_invalid(&err);
                    Err(err)
                }
                | false =>
                {
                    log::warn!("encountered recoverable error:\n{err}");
                    self.interface.report_invalid(&err)?;
                    self.ok()
                }
            },
        }
    }

    /// Searches the current position and plays the move it finds.
    fn auto(&mut self, args: &[&str]) -> Result<()>
    {
        let search_args = SearchArgs::parse(args, self.defaults)?;
        self.engine_move(search_args)
    }

    /// Prints the best move available in this position (for the side to move).
    fn best_move(&mut self, args: &[&str]) -> Result<()>
    {
        let search_args = SearchArgs::parse(args, self.defaults)?;
        let result = agent::search(self.board(), search_args);
        self.interface.report_line(&result.to_string())
    }

    /// Plays one move for the engine and shows the result.
    fn engine_move(&mut self, search_args: SearchArgs) -> Result<()>
    {
        let board = *self.board();
        if board.winner().is_some()
        {
            return Err(Error::new(Kind::GameOver, "There is nothing left to play.".into()));
        }

        if search_args.depth.is_horizon()
        {
            let err_msg = format!("Playing a move needs a depth of at least {}.", Depth::PLY);
            return Err(Error::new(Kind::InvalidOption, err_msg));
        }

        let result = agent::search(&board, search_args);
        let Some(mv) = result.best
        else
        {
            let err = Error::new(Kind::InternalError, format!("The search returned no move at depth {}.", search_args.depth));
            return Err(Error::holy_shit(err));
        };

        self.interface.report_line(&result.to_string())?;
        self.push(board.play(&mv)?)
    }

    /// Lets the engine answer while it is its turn.
    fn engine_reply(&mut self) -> Result<()>
    {
        while self.engine == Some(self.board().to_move()) && self.board().winner().is_none()
        {
            self.engine_move(self.defaults)?;
        }
        Ok(())
    }

    /// Prints the server's ID.
    fn info(&mut self) -> Result<()>
    {
        let id = format!("id {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        self.interface.report_line(&id)
    }

    /// Starts over from the initial position.
    fn new_game(&mut self) -> Result<()>
    {
        self.history = vec![Board::new()];
        self.show()?;
        self.engine_reply()
    }

    /// Prints the ok footer.
    fn ok(&mut self) -> Result<()>
    {
        self.interface.report_line("ok")
    }

    /// Plays the given move on the current board, and lets the engine answer.
    fn play_move(&mut self, args: &[&str]) -> Result<()>
    {
        if args.is_empty()
        {
            return Err(Error::new(Kind::ParseError, "You must provide a move such as c1c2 or kd5.".into()));
        }

        let mv = args.join("").parse::<Move>()?;
        let next = self.board().play(&mv)?;
        self.push(next)?;
        self.engine_reply()
    }

    /// Records a new position, shows it, and announces a winner if there is one.
    fn push(&mut self, board: Board) -> Result<()>
    {
        self.history.push(board);
        self.interface.render(&board)?;

        if let Some(winner) = board.winner()
        {
            log::info!("{} wins after {} plies", winner, self.history.len() - 1);
            self.interface.report_winner(winner)?;
        }
        Ok(())
    }

    /// Shows the current position.
    fn show(&mut self) -> Result<()>
    {
        let board = *self.board();
        self.interface.render(&board)
    }

    /// Takes back the given number of plies, stopping at the initial position.
    fn undo(&mut self, args: &[&str]) -> Result<()>
    {
        let n = match args.first()
        {
            | None => 1,
            | Some(arg) => arg.parse::<usize>().map_err(|_| Error::for_parse::<usize>(arg.to_string()))?,
        };

        if n >= self.history.len()
        {
            let err_msg = format!("Cannot undo {} plies, only {} have been played.", n, self.history.len() - 1);
            return Err(Error::new(Kind::InvalidOption, err_msg));
        }

        self.history.truncate(self.history.len() - n);
        self.show()
    }

    /// Prints all of the valid moves in this position.
    fn valid_moves(&mut self) -> Result<()>
    {
        let movelist = self.board().generate_moves().map(|mv| mv.to_string()).collect::<Vec<_>>().join(";");
        let movelist = if movelist.is_empty() { "none".into() } else { movelist };
        self.interface.report_line(&movelist)
    }
}
