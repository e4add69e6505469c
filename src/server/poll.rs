use std::collections::HashMap;
use std::io::ErrorKind;
use std::net::SocketAddr;

use log::{debug, error};
use mio::{Events, Interest, Poll, Token};
use mio::event::Event;
use mio::net::{TcpListener, TcpStream};

/// The number of IO events processed at a time.
const POLL_EVENT_CAPACITY: usize = 128;

/// Token used for the listener.
const LISTENER_TOKEN: Token = Token(usize::MAX);

/// Listens asynchronously on the given address. Calls on_new_connection for each new stream, and
/// calls on_io_ready for each stream that is ready for reading or writing.
/// The result of on_new_connection is passed to on_io_ready when the corresponding stream is IO ready.
/// Connections for which is_finished returns true are swept out after each batch of events.
pub fn listen<T>(addr: SocketAddr,
                 on_new_connection: impl Fn(TcpStream, SocketAddr) -> T,
                 on_io_ready: impl Fn(&T),
                 is_finished: impl Fn(&T) -> bool) -> std::io::Result<()> {
    let mut listener = TcpListener::bind(addr)?;

    let poll = Poll::new()?;
    poll.registry().register(&mut listener, LISTENER_TOKEN, Interest::READABLE)?;

    let mut connections: HashMap<usize, T> = HashMap::new();
    let mut next_token: usize = 0;

    poll_events(
        poll,
        &mut connections,
        |poll, connections, event|
            match event.token() {
                LISTENER_TOKEN => {
                    accept_until_blocked(&listener, |(mut stream, addr)| {
                        let token = next_token;
                        next_token += 1;
                        poll.registry().register(&mut stream, Token(token), Interest::READABLE | Interest::WRITABLE)?;
                        connections.insert(token, on_new_connection(stream, addr));
                        Ok(())
                    });
                }
                token if event.is_write_closed() => { connections.remove(&token.0); }
                token => { connections.get(&token.0).map(&on_io_ready); }
            },
        // served connections close their own streams, so no further event arrives for them
        |connections| connections.retain(|_, connection| !is_finished(connection)),
    )
}

/// Pulls events out of the given poll and passes them, with the connection state, to on_event.
/// After each batch of events the state is passed to sweep. Loops indefinitely.
fn poll_events<S>(mut poll: Poll,
                  state: &mut S,
                  mut on_event: impl FnMut(&mut Poll, &mut S, &Event),
                  mut sweep: impl FnMut(&mut S)) -> std::io::Result<()> {
    let mut events = Events::with_capacity(POLL_EVENT_CAPACITY);

    loop {
        poll.poll(&mut events, None)?;

        for event in &events {
            on_event(&mut poll, state, event);
        }

        sweep(state);
    }
}

/// Accepts new connections to the given listener until blocked. Calls on_connection for each connection stream.
fn accept_until_blocked(listener: &TcpListener, mut on_connection: impl FnMut((TcpStream, SocketAddr)) -> std::io::Result<()>) {
    loop {
        match listener.accept() {
            Ok(conn) => {
                if let Some(err) = on_connection(conn).err() {
                    error!("error initializing connection: {:?}", err)
                }
            }
            Err(err) if err.kind() == ErrorKind::WouldBlock => break,
            Err(err) => debug!("error accepting connection: {:?}", err)
        }
    }
}
