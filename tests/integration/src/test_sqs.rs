//! SQS integration tests.

#[cfg(test)]
mod tests {
    use quick_xml::Reader;
    use quick_xml::escape::{resolve_predefined_entity, unescape};
    use quick_xml::events::Event;

    use crate::{sqs_client, test_name};

    /// Read the unescaped text of the first `<tag>` element in a response
    /// document.
    fn element(document: &str, tag: &str) -> Option<String> {
        let mut reader = Reader::from_str(document);
        let mut inside = false;
        let mut text = String::new();
        loop {
            match reader.read_event().ok()? {
                Event::Start(e) if e.local_name().as_ref() == tag.as_bytes() => inside = true,
                Event::Text(e) if inside => {
                    let decoded = e.decode().ok()?;
                    text.push_str(&unescape(&decoded).ok()?);
                }
                Event::GeneralRef(e) if inside => match e.resolve_char_ref().ok()? {
                    Some(ch) => text.push(ch),
                    None => text.push_str(resolve_predefined_entity(&e.decode().ok()?)?),
                },
                Event::End(_) if inside => return Some(text),
                Event::Eof => return None,
                _ => {}
            }
        }
    }

    #[test]
    fn test_should_extract_element_text() {
        let doc = "<R><QueueUrl>http://q/1</QueueUrl></R>";
        assert_eq!(element(doc, "QueueUrl").as_deref(), Some("http://q/1"));
        assert_eq!(element(doc, "ReceiptHandle"), None);
    }

    #[test]
    fn test_should_unescape_element_text() {
        let doc = "<R><ReceiptHandle>a&amp;b&lt;c&#x41;</ReceiptHandle></R>";
        assert_eq!(element(doc, "ReceiptHandle").as_deref(), Some("a&b<cA"));
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_send_receive_and_delete_message() {
        let client = sqs_client();
        let name = test_name("queue");

        let created = client.create_queue(&name, Some(30)).await.expect("create_queue");
        let created = String::from_utf8_lossy(&created).into_owned();
        let queue_url = element(&created, "QueueUrl").expect("queue url");

        let listing = client.list_queues(Some(&name)).await.expect("list_queues");
        assert!(String::from_utf8_lossy(&listing).contains(&name));

        client
            .send_message(&queue_url, "hello world")
            .await
            .expect("send_message");

        let received = client
            .receive_message(&queue_url, Some(5), Some(1))
            .await
            .expect("receive_message");
        let received = String::from_utf8_lossy(&received).into_owned();
        assert_eq!(element(&received, "Body").as_deref(), Some("hello world"));

        let receipt = element(&received, "ReceiptHandle").expect("receipt handle");
        client
            .change_message_visibility(&queue_url, &receipt, 0)
            .await
            .expect("change_message_visibility");
        client
            .delete_message(&queue_url, &receipt)
            .await
            .expect("delete_message");

        client.delete_queue(&queue_url).await.expect("delete_queue");
    }
}
