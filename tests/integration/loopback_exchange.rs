use mdns_wire_domain::{Answer, CodecConfig, Query, RData, RecordType};
use mdns_wire_infrastructure::codec::{CollectingObserver, PacketCodec};
use mdns_wire_infrastructure::transport::{DatagramTransport, UdpTransport};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

const ANY_LOCAL: &str = "127.0.0.1:0";

async fn pair() -> (UdpTransport, UdpTransport) {
    let any: SocketAddr = ANY_LOCAL.parse().unwrap();
    let responder = UdpTransport::bind(any, any).await.unwrap();
    let querier = UdpTransport::bind(any, responder.local_addr().unwrap())
        .await
        .unwrap();
    (querier, responder)
}

async fn recv(transport: &UdpTransport, buf: &mut [u8]) -> (usize, SocketAddr) {
    tokio::time::timeout(Duration::from_secs(2), transport.recv(buf))
        .await
        .expect("datagram should arrive")
        .unwrap()
}

#[tokio::test]
async fn test_query_and_reply_over_loopback() {
    let (querier, responder) = pair().await;
    let config = CodecConfig::default();
    let mut buf = vec![0u8; config.buffer_capacity];

    let mut outgoing = PacketCodec::new(&config);
    outgoing
        .add_query(&Query::new("printer.local", RecordType::A).with_unicast_response(true))
        .unwrap();
    querier.send(outgoing.packet()).await.unwrap();

    let mut incoming = PacketCodec::with_observer(&config, CollectingObserver::new());
    let (len, from) = recv(&responder, &mut buf).await;
    let header = incoming.parse(&buf[..len]).unwrap();
    assert!(!header.is_answer);

    let question = incoming.observer().queries[0].clone();
    assert!(question.valid);
    assert!(question.unicast_response);

    let mut reply = PacketCodec::new(&config);
    reply
        .add_answer(
            &Answer::new(
                question.name.clone(),
                RData::A(Ipv4Addr::new(192, 168, 1, 40)),
                120,
            )
            .with_cache_flush(true),
        )
        .unwrap();
    responder.send_to(reply.packet(), from).await.unwrap();

    let mut answers = PacketCodec::with_observer(&config, CollectingObserver::new());
    let (len, _) = recv(&querier, &mut buf).await;
    let header = answers.parse(&buf[..len]).unwrap();

    assert!(header.is_answer);
    let record = &answers.observer().answers[0];
    assert!(record.valid);
    assert!(record.cache_flush);
    assert_eq!(record.name, "printer.local");
    assert_eq!(record.rdata.to_string(), "192.168.1.40");
}

#[tokio::test]
async fn test_garbage_datagram_yields_no_packet() {
    let (querier, responder) = pair().await;
    let mut buf = [0u8; 512];

    querier.send(b"definitely not dns").await.unwrap();

    let mut codec = PacketCodec::with_observer(&CodecConfig::default(), CollectingObserver::new());
    let (len, _) = recv(&responder, &mut buf).await;

    // byte 3 is 'i' (0x69), a non-zero response code
    assert!(codec.parse(&buf[..len]).is_none());
    assert!(codec.observer().is_empty());
}
